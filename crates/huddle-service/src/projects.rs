use crate::authorization::{require_capability, require_project, resolve_effective_role};
use crate::memberships::MemberView;
use crate::{Result, ServiceContext, ServiceError, invalidation};

use huddle_auth::AuthUser;
use huddle_cache::keys;
use huddle_core::validation::validate_required;
use huddle_core::{Capability, Membership, Priority, Project, Role, Status, Task, User};
use huddle_db::{MembershipRepository, ProjectRepository, TaskRepository, UserRepository};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields accepted when creating a project. Unset status and priority fall
/// back to the workflow defaults (BACKLOG, NO_PRIORITY).
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub start_date: Option<DateTime<Utc>>,
    pub target_date: Option<DateTime<Utc>>,
}

/// Full replacement of a project's editable fields. Optional fields are
/// written as given, so omitting a summary clears it.
#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub start_date: Option<DateTime<Utc>>,
    pub target_date: Option<DateTime<Utc>>,
}

/// Per-user project view: the project, its roster and tasks, plus the role
/// the requesting user holds (owner reads as ADMIN).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub members: Vec<MemberView>,
    pub tasks: Vec<Task>,
    pub current_user_role: Role,
}

/// Descriptive fields shared by every member's overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOverview {
    pub id: Uuid,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub start_date: Option<DateTime<Utc>>,
    pub target_date: Option<DateTime<Utc>>,
}

impl From<&Project> for ProjectOverview {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            summary: project.summary.clone(),
            description: project.description.clone(),
            status: project.status,
            priority: project.priority,
            start_date: project.start_date,
            target_date: project.target_date,
        }
    }
}

/// Create a project owned by the caller.
///
/// The owner also gets an ADMIN membership row so role lookups stay
/// uniform; that row is immune to removal and role changes.
pub async fn create_project(
    ctx: &ServiceContext,
    caller: &AuthUser,
    input: NewProject,
) -> Result<Project> {
    validate_required("name", &input.name)?;

    // Membership and project rows reference users; make sure the caller's
    // row exists even if the client never called sync.
    let users = UserRepository::new(ctx.pool.clone());
    let user = User::new(caller.id.clone(), caller.email.clone(), caller.name.clone());
    users.upsert(&user).await?;

    let mut project = Project::new(input.name.trim().to_string(), caller.id.clone());
    project.summary = input.summary;
    project.description = input.description;
    if let Some(status) = input.status {
        project.status = status;
    }
    if let Some(priority) = input.priority {
        project.priority = priority;
    }
    project.start_date = input.start_date;
    project.target_date = input.target_date;

    let projects = ProjectRepository::new(ctx.pool.clone());
    projects.create(&project).await?;

    let memberships = MembershipRepository::new(ctx.pool.clone());
    let owner_membership = Membership::new(caller.id.clone(), project.id, Role::Admin);
    memberships.create(&owner_membership).await?;

    ctx.cache
        .invalidate(&[keys::user_projects(&caller.id)])
        .await;

    log::info!("Created project {} owned by '{}'", project.id, caller.id);
    Ok(project)
}

/// Projects the caller owns or belongs to, newest first.
pub async fn list_projects(ctx: &ServiceContext, caller: &AuthUser) -> Result<Vec<Project>> {
    let key = keys::user_projects(&caller.id);
    if let Some(cached) = ctx.cache.get_json::<Vec<Project>>(&key).await {
        log::debug!("Project list for '{}' served from cache", caller.id);
        return Ok(cached);
    }

    let projects = ProjectRepository::new(ctx.pool.clone());
    let found = projects.find_by_member(&caller.id).await?;

    ctx.cache
        .put_json(&key, &found, ctx.cache.default_ttl())
        .await;
    Ok(found)
}

/// Project detail for the caller: project, roster, tasks and the caller's
/// own role. Cached per user so the embedded role never leaks across
/// accounts.
pub async fn get_project(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
) -> Result<ProjectDetail> {
    let key = keys::user_project(&caller.id, project_id);
    if let Some(cached) = ctx.cache.get_json::<ProjectDetail>(&key).await {
        return Ok(cached);
    }

    let project = require_project(&ctx.pool, project_id).await?;
    let role = resolve_effective_role(&ctx.pool, &caller.id, &project).await?;
    let Some(current_user_role) = role.as_role() else {
        return Err(ServiceError::not_authorized("Not a member of this project"));
    };

    let memberships = MembershipRepository::new(ctx.pool.clone());
    let members = memberships
        .find_by_project_with_users(project_id)
        .await?
        .iter()
        .map(MemberView::from)
        .collect();

    let tasks = TaskRepository::new(ctx.pool.clone())
        .find_by_project(project_id)
        .await?;

    let detail = ProjectDetail {
        project,
        members,
        tasks,
        current_user_role,
    };

    ctx.cache
        .put_json(&key, &detail, ctx.cache.default_ttl())
        .await;
    Ok(detail)
}

/// Overview fields for the project's landing page.
///
/// The gate always reads the store; the shared cache entry only skips
/// rebuilding the view for callers that passed it.
pub async fn get_overview(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
) -> Result<ProjectOverview> {
    let project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::ViewProject).await?;

    let key = keys::project_overview(project_id);
    if let Some(cached) = ctx.cache.get_json::<ProjectOverview>(&key).await {
        return Ok(cached);
    }

    let overview = ProjectOverview::from(&project);
    ctx.cache
        .put_json(&key, &overview, ctx.cache.long_ttl())
        .await;
    Ok(overview)
}

/// Replace the project's editable fields.
pub async fn update_project(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
    update: ProjectUpdate,
) -> Result<Project> {
    let (project, member_ids) = apply_update(ctx, caller, project_id, update).await?;

    let mut keys_out = vec![keys::project_overview(project_id)];
    keys_out.extend(invalidation::list_keys(&member_ids));
    keys_out.extend(invalidation::detail_keys(&member_ids, project_id));
    ctx.cache.invalidate(&keys_out).await;

    log::info!("Updated project {}", project.id);
    Ok(project)
}

/// Replace the overview fields, then immediately repopulate the shared
/// overview entry (delete-then-set) so the next read is warm.
pub async fn update_overview(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
    update: ProjectUpdate,
) -> Result<ProjectOverview> {
    let (project, member_ids) = apply_update(ctx, caller, project_id, update).await?;

    let overview_key = keys::project_overview(project_id);
    let mut keys_out = vec![overview_key.clone()];
    keys_out.extend(invalidation::list_keys(&member_ids));
    keys_out.extend(invalidation::detail_keys(&member_ids, project_id));
    ctx.cache.invalidate(&keys_out).await;

    let overview = ProjectOverview::from(&project);
    ctx.cache
        .put_json(&overview_key, &overview, ctx.cache.long_ttl())
        .await;

    log::info!("Updated overview for project {}", project.id);
    Ok(overview)
}

/// Delete the project outright. Owner only; memberships, tasks and
/// invitations go with it via foreign key cascade.
pub async fn delete_project(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
) -> Result<()> {
    let project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::DeleteProject).await?;

    // Gather the roster before the cascade removes it.
    let memberships = MembershipRepository::new(ctx.pool.clone());
    let member_ids = memberships.find_user_ids_by_project(project_id).await?;

    let projects = ProjectRepository::new(ctx.pool.clone());
    let deleted = projects.delete(project_id).await?;
    if !deleted {
        return Err(ServiceError::not_found(format!(
            "Project {project_id} not found"
        )));
    }

    ctx.cache
        .invalidate(&invalidation::all_project_keys(&member_ids, project_id))
        .await;

    log::info!("Deleted project {} by owner '{}'", project_id, caller.id);
    Ok(())
}

/// Shared write path for project and overview updates: validate, gate on
/// fresh state, persist, and report the member ids for invalidation.
async fn apply_update(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
    update: ProjectUpdate,
) -> Result<(Project, Vec<String>)> {
    validate_required("name", &update.name)?;

    let mut project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::EditContent).await?;

    project.name = update.name.trim().to_string();
    project.summary = update.summary;
    project.description = update.description;
    project.status = update.status;
    project.priority = update.priority;
    project.start_date = update.start_date;
    project.target_date = update.target_date;
    project.updated_at = Utc::now();

    let projects = ProjectRepository::new(ctx.pool.clone());
    projects.update(&project).await?;

    let memberships = MembershipRepository::new(ctx.pool.clone());
    let member_ids = memberships.find_user_ids_by_project(project_id).await?;

    Ok((project, member_ids))
}
