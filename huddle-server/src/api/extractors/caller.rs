//! Axum extractor for the authenticated caller

use crate::api::error::ApiError;
use crate::state::AppState;

use huddle_auth::{AuthUser, extract_bearer};

use std::future::Future;
use std::panic::Location;

use axum::http::header::AUTHORIZATION;
use axum::{extract::FromRequestParts, http::HeaderMap, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the verified caller identity from the request.
///
/// With authentication enabled, the bearer token is validated and the
/// identity comes from its claims. With authentication disabled
/// (development), identity comes from the `X-User-Id`, `X-User-Email` and
/// `X-User-Name` headers; requests without them are still rejected as
/// unauthenticated. Resolution is per request; nothing carries over.
pub struct Caller(pub AuthUser);

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match &state.jwt_validator {
                Some(validator) => {
                    let header = parts
                        .headers
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .ok_or_else(|| ApiError::NotAuthenticated {
                            message: "Authentication required".to_string(),
                            location: ErrorLocation::from(Location::caller()),
                        })?;

                    let token = extract_bearer(header)?;
                    let claims = validator.validate(token)?;
                    Ok(Caller(AuthUser::from_claims(claims)))
                }
                None => from_dev_headers(&parts.headers),
            }
        }
    }
}

/// Development identity: the client asserts who it is through headers.
fn from_dev_headers(headers: &HeaderMap) -> Result<Caller, ApiError> {
    let header_text = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let Some(id) = header_text("X-User-Id").filter(|v| !v.is_empty()) else {
        return Err(ApiError::NotAuthenticated {
            message: "Authentication required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };
    let Some(email) = header_text("X-User-Email").filter(|v| !v.is_empty()) else {
        return Err(ApiError::NotAuthenticated {
            message: "X-User-Email header required when authentication is disabled".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };
    let name = header_text("X-User-Name").filter(|v| !v.is_empty());

    log::debug!("Using development identity from headers: '{id}'");
    Ok(Caller(AuthUser { id, email, name }))
}
