//! Membership REST API handlers

use crate::api::extractors::caller::Caller;
use crate::state::AppState;
use crate::{ApiResult, DeleteResponse, MemberListResponse, MemberResponse, UpdateMemberRoleRequest};

use huddle_core::Role;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects/:id/members
///
/// List the project roster with member profiles, longest-standing first
pub async fn list_members(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<MemberListResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let members = huddle_service::list_members(&state.services, &caller, project_id).await?;

    Ok(Json(MemberListResponse {
        members: members.into_iter().map(Into::into).collect(),
    }))
}

/// DELETE /api/v1/projects/:id/members/:membership_id
///
/// Remove a member from the project. The owner's row is untouchable.
pub async fn remove_member(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path((id, membership_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let membership_id = Uuid::parse_str(&membership_id)?;

    huddle_service::remove_member(&state.services, &caller, project_id, membership_id).await?;

    Ok(Json(DeleteResponse { deleted: true }))
}

/// PUT /api/v1/projects/:id/members/:membership_id/role
///
/// Change a member's role. ADMIN or the owner only; never the owner's row.
pub async fn update_member_role(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path((id, membership_id)): Path<(String, String)>,
    Json(req): Json<UpdateMemberRoleRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let membership_id = Uuid::parse_str(&membership_id)?;
    let role = req.role.parse::<Role>()?;

    let membership =
        huddle_service::update_member_role(&state.services, &caller, project_id, membership_id, role)
            .await?;

    Ok(Json(MemberResponse {
        member: membership.into(),
    }))
}
