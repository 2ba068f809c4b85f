use crate::state::AppState;
use crate::{
    accept_invitation, create_invitation, create_project, create_task, delete_project,
    delete_task, get_overview, get_project, health, list_members, list_projects, list_tasks,
    remove_member, sync_user, update_member_role, update_overview, update_project, update_task,
};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Users
        .route("/api/v1/users/sync", post(sync_user))
        // Projects
        .route("/api/v1/projects", get(list_projects).post(create_project))
        .route(
            "/api/v1/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/api/v1/projects/{id}/overview",
            get(get_overview).put(update_overview),
        )
        // Members
        .route("/api/v1/projects/{id}/members", get(list_members))
        .route(
            "/api/v1/projects/{id}/members/{membership_id}",
            delete(remove_member),
        )
        .route(
            "/api/v1/projects/{id}/members/{membership_id}/role",
            put(update_member_role),
        )
        // Tasks
        .route(
            "/api/v1/projects/{id}/tasks",
            get(list_tasks).post(create_task),
        )
        .route("/api/v1/tasks/{id}", put(update_task).delete(delete_task))
        // Invitations
        .route("/api/v1/invitations", post(create_invitation))
        .route("/api/v1/invitations/accept", post(accept_invitation))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins for the SPA dev server)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
