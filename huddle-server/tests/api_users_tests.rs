//! Integration tests for user API handlers
mod common;

use crate::common::{authed_request, create_test_app_state};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use huddle_server::routes::build_router;

#[tokio::test]
async fn test_sync_user_mirrors_identity() {
    let state = create_test_app_state().await;

    let app = build_router(state.clone());
    let response = app
        .oneshot(authed_request("POST", "/api/v1/users/sync", "alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["user"]["id"], "alice");
    assert_eq!(json["user"]["email"], "alice@example.com");
    assert_eq!(json["user"]["name"], "User alice");
    assert!(json["user"]["created_at"].is_i64());
}

#[tokio::test]
async fn test_sync_user_is_idempotent() {
    let state = create_test_app_state().await;

    let app = build_router(state.clone());
    let response = app
        .clone()
        .oneshot(authed_request("POST", "/api/v1/users/sync", "alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(authed_request("POST", "/api/v1/users/sync", "alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["user"]["id"], "alice");
}

#[tokio::test]
async fn test_sync_user_follows_profile_changes() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = app
        .clone()
        .oneshot(authed_request("POST", "/api/v1/users/sync", "alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Same subject, renamed at the identity provider
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/users/sync")
        .header("X-User-Id", "alice")
        .header("X-User-Email", "alice@example.com")
        .header("X-User-Name", "Alice Cooper")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["user"]["name"], "Alice Cooper");
}

#[tokio::test]
async fn test_sync_user_requires_identity() {
    let state = create_test_app_state().await;

    let app = build_router(state.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/users/sync")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_AUTHENTICATED");
}
