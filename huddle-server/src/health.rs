use crate::state::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status snapshot
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => "operational",
        Err(e) => {
            log::warn!("Health check: database ping failed: {e}");
            "unavailable"
        }
    };

    // The cache is optional; absent just means every read is a miss.
    let cache = if state.services.cache.is_enabled() {
        "operational"
    } else {
        "disabled"
    };

    let healthy = database == "operational";
    let body = json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "cache": cache,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(body)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe (can we serve traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
