mod auth_config;
mod cache_config;
mod config;
mod database_config;
mod error;
mod invite_config;
mod log_level;
mod logging_config;
mod server_config;
mod smtp_config;

pub use auth_config::AuthConfig;
pub use cache_config::CacheConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use invite_config::InviteConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use smtp_config::SmtpConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_CACHE_ENABLED: bool = false;
const DEFAULT_CACHE_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_CACHE_TTL_SECS: u64 = 120;
const DEFAULT_CACHE_LONG_TTL_SECS: u64 = 200;
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_FROM_NAME: &str = "Huddle";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_DUPLICATE_WINDOW_SECS: u64 = 300;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
