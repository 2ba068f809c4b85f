use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DUPLICATE_WINDOW_SECS, DEFAULT_PUBLIC_BASE_URL,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    /// Base URL used to build acceptance links in invitation emails
    pub public_base_url: String,
    /// A pending invitation younger than this blocks a resend to the
    /// same email and project, in seconds
    pub duplicate_window_secs: u64,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            public_base_url: String::from(DEFAULT_PUBLIC_BASE_URL),
            duplicate_window_secs: DEFAULT_DUPLICATE_WINDOW_SECS,
        }
    }
}

impl InviteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.public_base_url.trim().is_empty() {
            return Err(ConfigError::invite("invite.public_base_url must not be empty"));
        }

        if self.duplicate_window_secs == 0 {
            return Err(ConfigError::invite("invite.duplicate_window_secs must be > 0"));
        }

        Ok(())
    }
}
