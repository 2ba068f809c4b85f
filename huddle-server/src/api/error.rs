//! REST API error types
//!
//! Every failure leaves the server as the same JSON envelope:
//! `{"error": {"code", "message", "field"?}}` with a status code from the
//! service-level taxonomy.

use huddle_auth::AuthError;
use huddle_core::CoreError;
use huddle_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid credentials (401)
    #[error("Not authenticated: {message} {location}")]
    NotAuthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but lacking the required role (403)
    #[error("Not authorized: {message} {location}")]
    NotAuthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Request conflicts with current state (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Signed-in address differs from the invited one (403)
    #[error("Email mismatch: {message} {location}")]
    EmailMismatch {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed or invalid input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Store, cache backend or mail relay unavailable (503)
    #[error("Upstream failure: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with the raise location before the detail is shed
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotAuthenticated { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "NOT_AUTHENTICATED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::NotAuthorized { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "NOT_AUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::EmailMismatch { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "EMAIL_MISMATCH".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION".into(),
                    message,
                    field,
                },
            ),
            ApiError::Upstream { message, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "UPSTREAM_UNAVAILABLE".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(source: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            ServiceError::NotAuthenticated { .. } => ApiError::NotAuthenticated {
                message: "Authentication required".to_string(),
                location,
            },
            ServiceError::NotAuthorized { message, .. } => {
                ApiError::NotAuthorized { message, location }
            }
            ServiceError::NotFound { message, .. } => ApiError::NotFound { message, location },
            ServiceError::Conflict { message, .. } => ApiError::Conflict { message, location },
            error @ ServiceError::EmailMismatch { .. } => ApiError::EmailMismatch {
                message: error.to_string(),
                location,
            },
            ServiceError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            ServiceError::Upstream { message, .. } => {
                // The detail goes to the log, never to the client
                log::error!("Upstream failure: {message}");
                ApiError::Upstream {
                    message: "A required backing service is unavailable".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert UUID parse errors on path parameters to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert authentication failures to 401 responses
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::warn!("Authentication failed: {e}");
        let message = match e {
            AuthError::TokenExpired { .. } => "Token expired".to_string(),
            _ => "Invalid authentication token".to_string(),
        };
        ApiError::NotAuthenticated {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert core parse failures (status, priority, role tokens) straight
/// through the service taxonomy
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ServiceError::from(e).into()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
