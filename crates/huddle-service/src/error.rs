use std::panic::Location;

use error_location::ErrorLocation;
use huddle_core::CoreError;
use huddle_db::DbError;
use huddle_mail::MailError;
use thiserror::Error;

/// Invitation lookups answer with this regardless of the underlying cause,
/// so the endpoint cannot be used as a token-guessing oracle.
pub const INVITATION_INVALID_MESSAGE: &str = "This invitation link is invalid or has expired";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Not authorized: {message}")]
    NotAuthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "This invitation was sent to a different email address. \
         Sign out and sign back in with the invited address to accept it."
    )]
    EmailMismatch { location: ErrorLocation },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Upstream failure: {message}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authorized(message: impl Into<String>) -> Self {
        Self::NotAuthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_mismatch() -> Self {
        Self::EmailMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code used in the HTTP error envelope
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotAuthenticated { .. } => "NOT_AUTHENTICATED",
            Self::NotAuthorized { .. } => "NOT_AUTHORIZED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::EmailMismatch { .. } => "EMAIL_MISMATCH",
            Self::Validation { .. } => "VALIDATION",
            Self::Upstream { .. } => "UPSTREAM_UNAVAILABLE",
        }
    }

    /// Offending field for validation errors, if one was named
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Upstream {
            message: format!("Database operation failed: {source}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MailError> for ServiceError {
    #[track_caller]
    fn from(source: MailError) -> Self {
        Self::Upstream {
            message: format!("Email dispatch failed: {source}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidStatus { value, .. } => Self::Validation {
                message: format!("Invalid status: {value}"),
                field: Some("status".to_string()),
                location,
            },
            CoreError::InvalidPriority { value, .. } => Self::Validation {
                message: format!("Invalid priority: {value}"),
                field: Some("priority".to_string()),
                location,
            },
            CoreError::InvalidRole { value, .. } => Self::Validation {
                message: format!("Invalid role: {value}"),
                field: Some("role".to_string()),
                location,
            },
            CoreError::Uuid { source, .. } => Self::Validation {
                message: format!("Invalid id: {source}"),
                field: None,
                location,
            },
            CoreError::MutationInFlight { .. } | CoreError::UnknownCorrelation { .. } => {
                Self::Conflict {
                    message: source.to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
