use crate::authorization::{require_capability, require_project};
use crate::{Result, ServiceContext, ServiceError, invalidation};

use huddle_auth::AuthUser;
use huddle_cache::keys;
use huddle_core::{Capability, Membership, Role};
use huddle_db::{MemberRecord, MembershipRepository};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile fields embedded in the member roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

/// One roster entry: the membership row plus the member's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberView {
    pub id: Uuid,
    pub user_id: String,
    pub role: Role,
    pub user: MemberProfile,
}

impl From<&MemberRecord> for MemberView {
    fn from(record: &MemberRecord) -> Self {
        Self {
            id: record.membership.id,
            user_id: record.membership.user_id.clone(),
            role: record.membership.role,
            user: MemberProfile {
                id: record.user.id.clone(),
                email: record.user.email.clone(),
                name: record.user.name.clone(),
            },
        }
    }
}

/// Member roster with profiles, longest-standing first. Any role may read
/// it; the shared cache entry lives under `project:{id}:members`.
pub async fn list_members(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
) -> Result<Vec<MemberView>> {
    let project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::ViewProject).await?;

    let key = keys::project_members(project_id);
    if let Some(cached) = ctx.cache.get_json::<Vec<MemberView>>(&key).await {
        return Ok(cached);
    }

    let memberships = MembershipRepository::new(ctx.pool.clone());
    let members: Vec<MemberView> = memberships
        .find_by_project_with_users(project_id)
        .await?
        .iter()
        .map(MemberView::from)
        .collect();

    ctx.cache
        .put_json(&key, &members, ctx.cache.long_ttl())
        .await;
    Ok(members)
}

/// Remove a member from the project.
///
/// The owner's own membership row is untouchable; deleting the project is
/// the only way it goes away.
pub async fn remove_member(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
    membership_id: Uuid,
) -> Result<()> {
    // Read-decide-write-invalidate, all against fresh store state.
    let project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::RemoveMember).await?;

    let memberships = MembershipRepository::new(ctx.pool.clone());
    let target = memberships
        .find_by_id(membership_id)
        .await?
        .filter(|m| m.project_id == project_id)
        .ok_or_else(|| ServiceError::not_found(format!("Member {membership_id} not found")))?;

    if target.user_id == project.owner_id {
        return Err(ServiceError::conflict("Cannot remove the project owner"));
    }

    // Roster before the delete, so the removed member's keys are covered.
    let member_ids = memberships.find_user_ids_by_project(project_id).await?;

    let deleted = memberships.delete(membership_id).await?;
    if !deleted {
        return Err(ServiceError::not_found(format!(
            "Member {membership_id} not found"
        )));
    }

    let mut keys_out = vec![
        keys::project_members(project_id),
        keys::user_projects(&target.user_id),
    ];
    keys_out.extend(invalidation::detail_keys(&member_ids, project_id));
    ctx.cache.invalidate(&keys_out).await;

    log::info!(
        "Removed member '{}' from project {}",
        target.user_id,
        project_id
    );
    Ok(())
}

/// Change a member's role. ADMIN (or the owner) only; the owner is never a
/// valid target.
pub async fn update_member_role(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
    membership_id: Uuid,
    new_role: Role,
) -> Result<Membership> {
    let project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::ManageRoles).await?;

    let memberships = MembershipRepository::new(ctx.pool.clone());
    let mut target = memberships
        .find_by_id(membership_id)
        .await?
        .filter(|m| m.project_id == project_id)
        .ok_or_else(|| ServiceError::not_found(format!("Member {membership_id} not found")))?;

    if target.user_id == project.owner_id {
        return Err(ServiceError::conflict(
            "Cannot change the role of the project owner",
        ));
    }

    let updated = memberships.update_role(membership_id, new_role).await?;
    if !updated {
        return Err(ServiceError::not_found(format!(
            "Member {membership_id} not found"
        )));
    }
    target.role = new_role;

    let member_ids = memberships.find_user_ids_by_project(project_id).await?;
    let mut keys_out = vec![keys::project_members(project_id)];
    keys_out.extend(invalidation::detail_keys(&member_ids, project_id));
    ctx.cache.invalidate(&keys_out).await;

    log::info!(
        "Changed role of member '{}' on project {} to {}",
        target.user_id,
        project_id,
        new_role
    );
    Ok(target)
}
