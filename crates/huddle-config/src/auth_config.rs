use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED};

use std::path::Path;

use serde::Deserialize;

/// Minimum HS256 secret length in characters
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// When disabled, identity comes from development headers instead of JWTs
    pub enabled: bool,
    /// HS256 shared secret; mutually exclusive with `jwt_public_key_path`
    pub jwt_secret: Option<String>,
    /// Path to an RS256 public key PEM, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Expected `iss` claim; unchecked when unset
    pub issuer: Option<String>,
    /// Expected `aud` claim; unchecked when unset
    pub audience: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            issuer: None,
            audience: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => {
                return Err(ConfigError::auth(
                    "auth.enabled requires jwt_secret or jwt_public_key_path",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::auth(
                    "jwt_secret and jwt_public_key_path are mutually exclusive",
                ));
            }
            _ => {}
        }

        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
            )));
        }

        if let Some(key_path) = &self.jwt_public_key_path {
            if Path::new(key_path).is_absolute() || key_path.contains("..") {
                return Err(ConfigError::auth(
                    "auth.jwt_public_key_path must be relative and cannot contain '..'",
                ));
            }

            let resolved = config_dir.join(key_path);
            if !resolved.exists() {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_public_key_path does not exist: {}",
                    resolved.display()
                )));
            }
        }

        Ok(())
    }
}
