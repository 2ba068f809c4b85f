//! Capability gates consulted before every project-scoped operation.
//!
//! Gates always read the store, never the cache: a role revoked a moment
//! ago must not keep authorizing mutations for a cache-TTL window.

use crate::{Result, ServiceError};

use huddle_core::{Capability, EffectiveRole, Project};
use huddle_db::{MembershipRepository, ProjectRepository};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Fetch the project or answer `NotFound`.
pub async fn require_project(pool: &SqlitePool, project_id: Uuid) -> Result<Project> {
    let repo = ProjectRepository::new(pool.clone());
    repo.find_by_id(project_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Project {project_id} not found")))
}

/// Resolve the caller's authority on `project`.
///
/// Owner outranks everything; otherwise the membership row's role applies;
/// otherwise no access.
pub async fn resolve_effective_role(
    pool: &SqlitePool,
    user_id: &str,
    project: &Project,
) -> Result<EffectiveRole> {
    if project.is_owner(user_id) {
        return Ok(EffectiveRole::Owner);
    }

    let repo = MembershipRepository::new(pool.clone());
    let membership = repo.find_by_user_and_project(user_id, project.id).await?;

    Ok(match membership {
        Some(membership) => EffectiveRole::Member(membership.role),
        None => EffectiveRole::NoAccess,
    })
}

/// Resolve the caller's authority and check it against `required`.
///
/// Returns the resolved authority so callers can reuse it (for example to
/// report `current_user_role`) without a second lookup.
pub async fn require_capability(
    pool: &SqlitePool,
    user_id: &str,
    project: &Project,
    required: Capability,
) -> Result<EffectiveRole> {
    let role = resolve_effective_role(pool, user_id, project).await?;

    if !role.has_access() {
        return Err(ServiceError::not_authorized(
            "Not a member of this project",
        ));
    }
    if !role.allows(required) {
        return Err(ServiceError::not_authorized(format!(
            "Insufficient permission. Required: {required:?}, have: {role:?}"
        )));
    }

    Ok(role)
}
