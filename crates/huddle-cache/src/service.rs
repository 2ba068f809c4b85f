use crate::store::CacheStore;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read-through cache front.
///
/// All operations are infallible from the caller's perspective: a store
/// failure is logged and reported as a miss (or a no-op on write), so the
/// source of truth keeps serving requests when the cache is down.
#[derive(Clone)]
pub struct CacheService {
    store: Option<Arc<dyn CacheStore>>,
    default_ttl: Duration,
    long_ttl: Duration,
}

impl CacheService {
    /// Service that never caches. Every read is a miss, every write a no-op.
    pub fn disabled() -> Self {
        Self {
            store: None,
            default_ttl: Duration::ZERO,
            long_ttl: Duration::ZERO,
        }
    }

    pub fn with_store(
        store: Arc<dyn CacheStore>,
        default_ttl: Duration,
        long_ttl: Duration,
    ) -> Self {
        Self {
            store: Some(store),
            default_ttl,
            long_ttl,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// TTL for most cached reads
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// TTL for slower-changing aggregates (member lists, overviews)
    pub fn long_ttl(&self) -> Duration {
        self.long_ttl
    }

    /// Fetch and deserialize a cached value.
    ///
    /// Returns `None` on a miss, on a store failure, or when the stored
    /// payload no longer deserializes. A malformed payload is deleted so the
    /// next read repopulates it.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let store = self.store.as_ref()?;

        let payload = match store.get(key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(error) => {
                log::warn!("Cache read failed for '{key}', treating as miss: {error}");
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(value) => Some(value),
            Err(error) => {
                log::warn!("Cache payload for '{key}' is malformed, evicting: {error}");
                if let Err(error) = store.delete(key).await {
                    log::warn!("Failed to evict malformed cache entry '{key}': {error}");
                }
                None
            }
        }
    }

    /// Serialize and store a value under `key` for `ttl`.
    ///
    /// Failures are logged and swallowed; the entry simply stays cold.
    pub async fn put_json<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let Some(store) = self.store.as_ref() else {
            return;
        };

        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(error) => {
                log::warn!("Failed to serialize cache payload for '{key}': {error}");
                return;
            }
        };

        if let Err(error) = store.set(key, &payload, ttl).await {
            log::warn!("Cache write failed for '{key}': {error}");
        }
    }

    /// Delete every key in `keys`.
    ///
    /// Called after each successful write to the source of truth. A failed
    /// delete is logged and skipped; the entry expires by TTL instead.
    pub async fn invalidate(&self, keys: &[String]) {
        let Some(store) = self.store.as_ref() else {
            return;
        };

        for key in keys {
            if let Err(error) = store.delete(key).await {
                log::warn!("Cache invalidation failed for '{key}': {error}");
            }
        }
    }
}
