use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CACHE_ENABLED, DEFAULT_CACHE_LONG_TTL_SECS,
    DEFAULT_CACHE_TTL_SECS, DEFAULT_CACHE_URL,
};

use serde::Deserialize;

/// Read-through cache settings. When disabled every lookup is a miss and
/// the server reads straight from the database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Redis connection URL, e.g. redis://127.0.0.1:6379
    pub url: String,
    /// Expiry for project and task listings, in seconds
    pub default_ttl_secs: u64,
    /// Expiry for member lists and overview projections, in seconds
    pub long_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_CACHE_ENABLED,
            url: String::from(DEFAULT_CACHE_URL),
            default_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            long_ttl_secs: DEFAULT_CACHE_LONG_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled && self.url.trim().is_empty() {
            return Err(ConfigError::cache("cache.url must not be empty"));
        }

        if self.default_ttl_secs == 0 {
            return Err(ConfigError::cache("cache.default_ttl_secs must be > 0"));
        }

        if self.long_ttl_secs == 0 {
            return Err(ConfigError::cache("cache.long_ttl_secs must be > 0"));
        }

        Ok(())
    }
}
