use crate::ApiError;

use huddle_auth::AuthError;
use huddle_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_authenticated_returns_401_with_json_body() {
    let error = ApiError::NotAuthenticated {
        message: "Authentication required".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_AUTHENTICATED");
    assert_eq!(json["error"]["message"], "Authentication required");
}

#[tokio::test]
async fn test_not_authorized_returns_403() {
    let error = ApiError::NotAuthorized {
        message: "Insufficient permission".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_AUTHORIZED");
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Project not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project not found");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: "Cannot remove the project owner".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_email_mismatch_returns_403_with_own_code() {
    let error: ApiError = ServiceError::email_mismatch().into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "EMAIL_MISMATCH");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("different email address")
    );
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "name must not be empty".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_validation_without_field_omits_field_key() {
    let error = ApiError::Validation {
        message: "Invalid UUID format".into(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_upstream_returns_503() {
    let error = ApiError::Upstream {
        message: "A required backing service is unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "UPSTREAM_UNAVAILABLE");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Invalid UUID"));
            assert!(field.is_none());
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_upstream_service_error_masks_internal_detail() {
    let api_err: ApiError = ServiceError::upstream("connection refused on 127.0.0.1:6379").into();

    match api_err {
        ApiError::Upstream { message, .. } => {
            assert_eq!(message, "A required backing service is unavailable");
        }
        _ => panic!("Expected Upstream error"),
    }
}

#[test]
fn test_expired_auth_error_maps_to_not_authenticated() {
    let auth_err = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    match api_err {
        ApiError::NotAuthenticated { message, .. } => {
            assert_eq!(message, "Token expired");
        }
        _ => panic!("Expected NotAuthenticated error"),
    }
}

#[test]
fn test_validation_service_error_keeps_field() {
    let api_err: ApiError = ServiceError::validation_field("email is not valid", "email").into();

    match api_err {
        ApiError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("email"));
        }
        _ => panic!("Expected Validation error"),
    }
}
