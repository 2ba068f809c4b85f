use std::sync::Arc;

use huddle_cache::CacheService;
use huddle_mail::Mailer;
use sqlx::SqlitePool;

/// Invitation policy shared by the invitation operations.
#[derive(Debug, Clone)]
pub struct InviteSettings {
    /// Base URL embedded in acceptance links, without a trailing slash
    pub public_base_url: String,
    /// Age below which a pending invitation blocks a re-invite
    pub duplicate_window_secs: u64,
}

/// Resources handed to every service operation.
///
/// Cheap to clone; the pool, cache and mailer are all shared handles.
/// Repositories are constructed per call from the pool.
#[derive(Clone)]
pub struct ServiceContext {
    pub pool: SqlitePool,
    pub cache: CacheService,
    pub mailer: Arc<dyn Mailer>,
    pub invites: InviteSettings,
}

impl ServiceContext {
    pub fn new(
        pool: SqlitePool,
        cache: CacheService,
        mailer: Arc<dyn Mailer>,
        invites: InviteSettings,
    ) -> Self {
        Self {
            pool,
            cache,
            mailer,
            invites,
        }
    }
}
