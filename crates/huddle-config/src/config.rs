use crate::{
    AuthConfig, CacheConfig, ConfigError, ConfigErrorResult, DatabaseConfig, InviteConfig,
    LoggingConfig, ServerConfig, SmtpConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cache: CacheConfig,
    pub smtp: SmtpConfig,
    pub invite: InviteConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load the configuration without validating it.
    ///
    /// Resolution order: `HUDDLE_CONFIG_DIR` (else `./.huddle/`, created on
    /// first run), then `config.toml` inside it (else pure defaults), then
    /// `HUDDLE_*` env overrides on top. Call `validate()` afterwards so
    /// every startup problem surfaces at once.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::ensure_config_dir()?.join("config.toml");

        let mut config = match config_path.exists() {
            true => Self::parse_file(&config_path)?,
            false => Config::default(),
        };
        config.apply_env_overrides();

        Ok(config)
    }

    /// Config directory, created if absent.
    fn ensure_config_dir() -> ConfigErrorResult<PathBuf> {
        let dir = Self::config_dir()?;
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| ConfigError::Io {
                path: dir.clone(),
                source: e,
            })?;
        }
        Ok(dir)
    }

    fn parse_file(path: &Path) -> ConfigErrorResult<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HUDDLE_CONFIG_DIR env var > ./.huddle/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        match std::env::var("HUDDLE_CONFIG_DIR") {
            Ok(dir) => Ok(PathBuf::from(dir)),
            Err(_) => std::env::current_dir()
                .map(|cwd| cwd.join(".huddle"))
                .map_err(|_| ConfigError::config("Cannot determine current working directory")),
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.cache.validate()?;
        self.smtp.validate()?;
        self.invite.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            auth_type
        );

        // Cache URL may embed credentials, log TTLs only
        info!(
            "  cache: {} (ttl={}s, long_ttl={}s)",
            if self.cache.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.cache.default_ttl_secs,
            self.cache.long_ttl_secs
        );

        match &self.smtp.host {
            Some(host) => info!(
                "  smtp: {}:{} (tls: {})",
                host, self.smtp.port, self.smtp.tls
            ),
            None => info!("  smtp: not configured (invitations logged only)"),
        }

        info!(
            "  invite: base_url={}, duplicate_window={}s",
            self.invite.public_base_url, self.invite.duplicate_window_secs
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        override_string("HUDDLE_SERVER_HOST", &mut self.server.host);
        override_parsed("HUDDLE_SERVER_PORT", &mut self.server.port);

        // Database
        override_string("HUDDLE_DATABASE_PATH", &mut self.database.path);

        // Auth
        override_flag("HUDDLE_AUTH_ENABLED", &mut self.auth.enabled);
        override_optional("HUDDLE_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        override_optional(
            "HUDDLE_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        override_optional("HUDDLE_AUTH_ISSUER", &mut self.auth.issuer);
        override_optional("HUDDLE_AUTH_AUDIENCE", &mut self.auth.audience);

        // Cache
        override_flag("HUDDLE_CACHE_ENABLED", &mut self.cache.enabled);
        override_string("HUDDLE_CACHE_URL", &mut self.cache.url);
        override_parsed(
            "HUDDLE_CACHE_DEFAULT_TTL_SECS",
            &mut self.cache.default_ttl_secs,
        );
        override_parsed("HUDDLE_CACHE_LONG_TTL_SECS", &mut self.cache.long_ttl_secs);

        // Smtp
        override_optional("HUDDLE_SMTP_HOST", &mut self.smtp.host);
        override_parsed("HUDDLE_SMTP_PORT", &mut self.smtp.port);
        override_optional("HUDDLE_SMTP_USERNAME", &mut self.smtp.username);
        override_optional("HUDDLE_SMTP_PASSWORD", &mut self.smtp.password);
        override_optional("HUDDLE_SMTP_FROM_ADDRESS", &mut self.smtp.from_address);
        override_string("HUDDLE_SMTP_FROM_NAME", &mut self.smtp.from_name);
        override_flag("HUDDLE_SMTP_TLS", &mut self.smtp.tls);

        // Invite
        override_string(
            "HUDDLE_INVITE_PUBLIC_BASE_URL",
            &mut self.invite.public_base_url,
        );
        override_parsed(
            "HUDDLE_INVITE_DUPLICATE_WINDOW_SECS",
            &mut self.invite.duplicate_window_secs,
        );

        // Logging
        override_parsed("HUDDLE_LOG_LEVEL", &mut self.logging.level);
        override_flag("HUDDLE_LOG_COLORED", &mut self.logging.colored);
        override_optional("HUDDLE_LOG_FILE", &mut self.logging.file);
    }
}

fn override_string(var_name: &str, target: &mut String) {
    if let Ok(val) = std::env::var(var_name) {
        *target = val;
    }
}

/// Accepts "true" or "1"; anything else reads as false.
fn override_flag(var_name: &str, target: &mut bool) {
    if let Ok(val) = std::env::var(var_name) {
        *target = val == "true" || val == "1";
    }
}

/// Unparseable values are ignored, the prior value stands.
fn override_parsed<T: std::str::FromStr>(var_name: &str, target: &mut T) {
    if let Ok(val) = std::env::var(var_name)
        && let Ok(parsed) = val.parse()
    {
        *target = parsed;
    }
}

fn override_optional(var_name: &str, target: &mut Option<String>) {
    if let Ok(val) = std::env::var(var_name) {
        *target = Some(val);
    }
}
