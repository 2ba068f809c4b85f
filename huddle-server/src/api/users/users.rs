//! User REST API handlers

use crate::api::extractors::caller::Caller;
use crate::state::AppState;
use crate::{ApiResult, UserResponse};

use axum::{Json, extract::State};

/// POST /api/v1/users/sync
///
/// Mirror the authenticated identity into the users table. Clients call
/// this once after login.
pub async fn sync_user(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> ApiResult<Json<UserResponse>> {
    let user = huddle_service::sync_user(&state.services, &caller).await?;

    Ok(Json(UserResponse { user: user.into() }))
}
