use crate::Result;

use std::time::Duration;

use async_trait::async_trait;

/// Raw string key-value store with per-entry expiry.
///
/// Implementations report their own failures; the read-through policy
/// (treat failure as a miss) lives in [`crate::CacheService`], not here.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<()>;
}
