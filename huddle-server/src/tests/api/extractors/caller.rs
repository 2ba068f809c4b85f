use crate::state::AppState;
use crate::{ApiError, Caller};

use huddle_auth::{Claims, JwtValidator};
use huddle_cache::CacheService;
use huddle_mail::NullMailer;
use huddle_service::{InviteSettings, ServiceContext};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

async fn create_test_state(jwt_validator: Option<Arc<JwtValidator>>) -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    huddle_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let services = ServiceContext::new(
        pool,
        CacheService::disabled(),
        Arc::new(NullMailer),
        InviteSettings {
            public_base_url: "http://127.0.0.1:8000".to_string(),
            duplicate_window_secs: 300,
        },
    );

    AppState::new(services, jwt_validator)
}

fn mint_token(sub: &str, email: &str, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        email: email.to_string(),
        name: Some("Token User".to_string()),
        exp: now + exp_offset_secs,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

#[tokio::test]
async fn test_dev_headers_yield_caller_identity() {
    let state = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "dev-user-1")
        .header("X-User-Email", "dev@example.com")
        .header("X-User-Name", "Dev User")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    let caller = result.expect("Expected dev headers to authenticate").0;
    assert_eq!(caller.id, "dev-user-1");
    assert_eq!(caller.email, "dev@example.com");
    assert_eq!(caller.name.as_deref(), Some("Dev User"));
}

#[tokio::test]
async fn test_dev_headers_without_name_leave_name_unset() {
    let state = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "dev-user-1")
        .header("X-User-Email", "dev@example.com")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    let caller = result.expect("Expected dev headers to authenticate").0;
    assert!(caller.name.is_none());
}

#[tokio::test]
async fn test_missing_user_id_header_is_rejected() {
    let state = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Email", "dev@example.com")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn test_missing_email_header_is_rejected() {
    let state = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "dev-user-1")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn test_empty_header_values_are_rejected() {
    let state = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "")
        .header("X-User-Email", "dev@example.com")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn test_bearer_token_yields_caller_identity() {
    let validator = Arc::new(JwtValidator::with_hs256(TEST_SECRET));
    let state = create_test_state(Some(validator)).await;
    let token = mint_token("jwt-user-1", "jwt@example.com", 3600);

    let request = Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    let caller = result.expect("Expected bearer token to authenticate").0;
    assert_eq!(caller.id, "jwt-user-1");
    assert_eq!(caller.email, "jwt@example.com");
    assert_eq!(caller.name.as_deref(), Some("Token User"));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let validator = Arc::new(JwtValidator::with_hs256(TEST_SECRET));
    let state = create_test_state(Some(validator)).await;
    let token = mint_token("jwt-user-1", "jwt@example.com", -3600);

    let request = Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn test_wrong_scheme_is_rejected() {
    let validator = Arc::new(JwtValidator::with_hs256(TEST_SECRET));
    let state = create_test_state(Some(validator)).await;
    let token = mint_token("jwt-user-1", "jwt@example.com", 3600);

    let request = Request::builder()
        .header("Authorization", format!("Token {token}"))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn test_jwt_mode_ignores_dev_headers() {
    let validator = Arc::new(JwtValidator::with_hs256(TEST_SECRET));
    let state = create_test_state(Some(validator)).await;

    // Dev headers must not stand in for a token once auth is enabled
    let request = Request::builder()
        .header("X-User-Id", "dev-user-1")
        .header("X-User-Email", "dev@example.com")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Caller::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotAuthenticated { .. })));
}
