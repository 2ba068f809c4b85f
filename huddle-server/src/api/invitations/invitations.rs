//! Invitation REST API handlers

use crate::api::extractors::caller::Caller;
use crate::state::AppState;
use crate::{
    AcceptInvitationRequest, AcceptResponse, ApiResult, CreateInvitationRequest,
    InvitationResponse,
};

use huddle_core::Role;
use huddle_service::InvitationRequest;

use axum::{Json, extract::State};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/invitations
///
/// Invite an email address to a project. EDITOR and up; the acceptance
/// token leaves only by email.
pub async fn create_invitation(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(req): Json<CreateInvitationRequest>,
) -> ApiResult<Json<InvitationResponse>> {
    let project_id = Uuid::parse_str(&req.project_id)?;
    let input = InvitationRequest {
        email: req.email,
        role: req.role.parse::<Role>()?,
    };

    let invitation =
        huddle_service::send_invitation(&state.services, &caller, project_id, input).await?;

    Ok(Json(InvitationResponse {
        invitation: invitation.into(),
    }))
}

/// POST /api/v1/invitations/accept
///
/// Redeem an acceptance token for a membership. Idempotent for the member
/// the token admitted.
pub async fn accept_invitation(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(req): Json<AcceptInvitationRequest>,
) -> ApiResult<Json<AcceptResponse>> {
    let accepted =
        huddle_service::accept_invitation(&state.services, &caller, &req.token).await?;

    Ok(Json(AcceptResponse {
        project_id: accepted.project_id.to_string(),
    }))
}
