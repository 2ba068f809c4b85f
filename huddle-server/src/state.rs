use huddle_auth::JwtValidator;
use huddle_service::ServiceContext;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
///
/// `jwt_validator` being `None` means authentication is disabled and the
/// caller identity comes from development headers instead.
#[derive(Clone)]
pub struct AppState {
    pub services: ServiceContext,
    pub jwt_validator: Option<Arc<JwtValidator>>,
}

impl AppState {
    pub fn new(services: ServiceContext, jwt_validator: Option<Arc<JwtValidator>>) -> Self {
        Self {
            services,
            jwt_validator,
        }
    }

    /// Store pool, for probes that check connectivity directly.
    pub fn pool(&self) -> &SqlitePool {
        &self.services.pool
    }
}
