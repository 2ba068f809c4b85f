use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Pull the token out of an `Authorization: Bearer <token>` header value.
#[track_caller]
pub fn extract_bearer(header_value: &str) -> AuthErrorResult<&str> {
    let caller = Location::caller();

    let Some((scheme, token)) = header_value.split_once(' ') else {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(caller),
        });
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(caller),
        });
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(caller),
        });
    }

    Ok(token)
}
