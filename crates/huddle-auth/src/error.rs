use error_location::ErrorLocation;
use thiserror::Error;

/// Failures while turning a request credential into an identity.
///
/// Every variant maps to a 401 at the HTTP boundary; the distinctions
/// exist for logs and tests, not for clients.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization scheme must be 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Unusable token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature or structure rejected: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Claim '{claim}' rejected: {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
