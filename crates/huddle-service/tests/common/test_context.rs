use super::doubles::{FailingCacheStore, RecordingMailer};

use huddle_cache::{CacheService, CacheStore, MemoryStore};
use huddle_mail::Mailer;
use huddle_service::{InviteSettings, ServiceContext};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    huddle_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Service context plus handles into its doubles, for assertions
pub struct TestContext {
    pub ctx: ServiceContext,
    pub mailer: Arc<RecordingMailer>,
    pub store: Arc<MemoryStore>,
}

pub fn invite_settings() -> InviteSettings {
    InviteSettings {
        public_base_url: "http://127.0.0.1:8000".to_string(),
        duplicate_window_secs: 300,
    }
}

/// Context backed by an in-memory store, a memory cache and a recording
/// mailer
pub async fn test_context() -> TestContext {
    let pool = create_test_pool().await;
    let store = Arc::new(MemoryStore::new());
    let cache = CacheService::with_store(
        store.clone(),
        Duration::from_secs(120),
        Duration::from_secs(200),
    );
    let mailer = Arc::new(RecordingMailer::new());
    let ctx = ServiceContext::new(pool, cache, mailer.clone(), invite_settings());

    TestContext { ctx, mailer, store }
}

/// Context whose mailer always fails
pub async fn test_context_with_mailer(mailer: Arc<dyn Mailer>) -> ServiceContext {
    let pool = create_test_pool().await;
    let cache = CacheService::with_store(
        Arc::new(MemoryStore::new()),
        Duration::from_secs(120),
        Duration::from_secs(200),
    );
    ServiceContext::new(pool, cache, mailer, invite_settings())
}

/// Context whose cache backend fails every operation
pub async fn test_context_with_broken_cache() -> TestContext {
    let pool = create_test_pool().await;
    let broken: Arc<dyn CacheStore> = Arc::new(FailingCacheStore);
    let cache = CacheService::with_store(
        broken,
        Duration::from_secs(120),
        Duration::from_secs(200),
    );
    let mailer = Arc::new(RecordingMailer::new());
    let ctx = ServiceContext::new(pool, cache, mailer.clone(), invite_settings());

    TestContext {
        ctx,
        mailer,
        // Unused by these contexts; assertions go against the store truth.
        store: Arc::new(MemoryStore::new()),
    }
}
