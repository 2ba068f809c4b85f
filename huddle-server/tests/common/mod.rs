#![allow(dead_code)]

//! Test infrastructure for huddle-server API tests
//!
//! Builds real router instances backed by in-memory SQLite and a memory
//! cache, with authentication disabled so identity comes from the
//! `X-User-*` development headers.

use huddle_auth::AuthUser;
use huddle_cache::{CacheService, MemoryStore};
use huddle_core::{Membership, Role};
use huddle_db::MembershipRepository;
use huddle_mail::NullMailer;
use huddle_server::AppState;
use huddle_service::{InviteSettings, NewProject, NewTask, ServiceContext};

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    huddle_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing: memory cache, null mailer, auth disabled
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let cache = CacheService::with_store(
        Arc::new(MemoryStore::new()),
        Duration::from_secs(120),
        Duration::from_secs(200),
    );

    let services = ServiceContext::new(
        pool,
        cache,
        Arc::new(NullMailer),
        InviteSettings {
            public_base_url: "http://127.0.0.1:8000".to_string(),
            duplicate_window_secs: 300,
        },
    );

    AppState::new(services, None)
}

/// Identity matching the headers [`authed_request`] sends for `id`
pub fn auth_user(id: &str) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        name: Some(format!("User {id}")),
    }
}

/// Build a request carrying the development identity headers
pub fn authed_request(method: &str, uri: &str, user_id: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-User-Id", user_id)
        .header("X-User-Email", format!("{user_id}@example.com"))
        .header("X-User-Name", format!("User {user_id}"))
        .body(Body::empty())
        .unwrap()
}

/// Same as [`authed_request`] with a JSON body attached
pub fn authed_json_request(
    method: &str,
    uri: &str,
    user_id: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-User-Id", user_id)
        .header("X-User-Email", format!("{user_id}@example.com"))
        .header("X-User-Name", format!("User {user_id}"))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Create a project through the service layer, owned by `owner`
pub async fn seed_project(state: &AppState, owner: &str, name: &str) -> Uuid {
    let project = huddle_service::create_project(
        &state.services,
        &auth_user(owner),
        NewProject {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to seed project");

    project.id
}

/// Add `user` to the project with `role`, creating the user row first
pub async fn seed_member(state: &AppState, project_id: Uuid, user: &str, role: Role) -> Uuid {
    huddle_service::sync_user(&state.services, &auth_user(user))
        .await
        .expect("Failed to seed user");

    let membership = Membership::new(user.to_string(), project_id, role);
    MembershipRepository::new(state.services.pool.clone())
        .create(&membership)
        .await
        .expect("Failed to seed membership");

    membership.id
}

/// Create a task through the service layer
pub async fn seed_task(state: &AppState, owner: &str, project_id: Uuid, title: &str) -> Uuid {
    let task = huddle_service::create_task(
        &state.services,
        &auth_user(owner),
        project_id,
        NewTask {
            title: title.to_string(),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to seed task");

    task.id
}

/// Latest pending invitation token for `email`, straight from the store
pub async fn invitation_token(pool: &SqlitePool, email: &str) -> String {
    sqlx::query_scalar("SELECT token FROM invitations WHERE email = ?1 ORDER BY created_at DESC")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("Expected an invitation row")
}
