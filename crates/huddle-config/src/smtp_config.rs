use crate::{ConfigError, ConfigErrorResult, DEFAULT_SMTP_FROM_NAME, DEFAULT_SMTP_PORT};

use serde::Deserialize;

/// Outbound mail settings. Leaving `host` unset selects the null mailer,
/// which logs instead of sending.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender address, required when host is set
    pub from_address: Option<String>,
    /// Display name on the From header
    pub from_name: String,
    /// STARTTLS when true, plaintext relay when false
    pub tls: bool,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_SMTP_PORT,
            username: None,
            password: None,
            from_address: None,
            from_name: String::from(DEFAULT_SMTP_FROM_NAME),
            tls: true,
        }
    }
}

impl SmtpConfig {
    /// True when a relay host is configured.
    pub fn is_configured(&self) -> bool {
        self.host.is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.is_configured() {
            return Ok(());
        }

        if self.port == 0 {
            return Err(ConfigError::smtp("smtp.port must be > 0"));
        }

        match &self.from_address {
            None => Err(ConfigError::smtp(
                "smtp.from_address is required when smtp.host is set",
            )),
            Some(addr) if addr.trim().is_empty() => {
                Err(ConfigError::smtp("smtp.from_address must not be empty"))
            }
            Some(_) => Ok(()),
        }
    }
}
