use crate::authorization::{require_capability, require_project};
use crate::{Result, ServiceContext, ServiceError, invalidation};

use huddle_auth::AuthUser;
use huddle_cache::keys;
use huddle_core::validation::validate_required;
use huddle_core::{Capability, Priority, Status, Task};
use huddle_db::{MembershipRepository, TaskRepository};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fields accepted when creating a task. Unset status and priority fall
/// back to BACKLOG and NO_PRIORITY.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Full replacement of a task's editable fields.
#[derive(Debug, Clone)]
pub struct TaskUpdate {
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
}

/// Tasks of a project, oldest first. Any role may read; the shared entry
/// lives under `project:{id}:tasks`.
pub async fn list_tasks(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
) -> Result<Vec<Task>> {
    let project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::ViewProject).await?;

    let key = keys::project_tasks(project_id);
    if let Some(cached) = ctx.cache.get_json::<Vec<Task>>(&key).await {
        return Ok(cached);
    }

    let tasks = TaskRepository::new(ctx.pool.clone())
        .find_by_project(project_id)
        .await?;

    ctx.cache
        .put_json(&key, &tasks, ctx.cache.default_ttl())
        .await;
    Ok(tasks)
}

/// Create a task in the project. EDITOR and up.
pub async fn create_task(
    ctx: &ServiceContext,
    caller: &AuthUser,
    project_id: Uuid,
    input: NewTask,
) -> Result<Task> {
    validate_required("title", &input.title)?;

    let project = require_project(&ctx.pool, project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::EditContent).await?;

    let mut task = Task::new(input.title.trim().to_string(), project_id);
    task.description = input.description;
    if let Some(status) = input.status {
        task.status = status;
    }
    if let Some(priority) = input.priority {
        task.priority = priority;
    }
    task.due_date = input.due_date;

    let tasks = TaskRepository::new(ctx.pool.clone());
    tasks.create(&task).await?;

    invalidate_task_views(ctx, project_id).await?;

    log::info!("Created task {} in project {}", task.id, project_id);
    Ok(task)
}

/// Replace a task's editable fields. EDITOR and up on the owning project.
pub async fn update_task(
    ctx: &ServiceContext,
    caller: &AuthUser,
    task_id: Uuid,
    update: TaskUpdate,
) -> Result<Task> {
    validate_required("title", &update.title)?;

    let tasks = TaskRepository::new(ctx.pool.clone());
    let mut task = tasks
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Task {task_id} not found")))?;

    let project = require_project(&ctx.pool, task.project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::EditContent).await?;

    task.title = update.title.trim().to_string();
    task.description = update.description;
    task.status = update.status;
    task.priority = update.priority;
    task.due_date = update.due_date;
    task.updated_at = Utc::now();

    tasks.update(&task).await?;

    invalidate_task_views(ctx, task.project_id).await?;

    log::info!("Updated task {}", task.id);
    Ok(task)
}

/// Delete a task. EDITOR and up on the owning project.
pub async fn delete_task(ctx: &ServiceContext, caller: &AuthUser, task_id: Uuid) -> Result<()> {
    let tasks = TaskRepository::new(ctx.pool.clone());
    let task = tasks
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Task {task_id} not found")))?;

    let project = require_project(&ctx.pool, task.project_id).await?;
    require_capability(&ctx.pool, &caller.id, &project, Capability::EditContent).await?;

    let deleted = tasks.delete(task_id).await?;
    if !deleted {
        return Err(ServiceError::not_found(format!("Task {task_id} not found")));
    }

    invalidate_task_views(ctx, task.project_id).await?;

    log::info!("Deleted task {} from project {}", task_id, task.project_id);
    Ok(())
}

/// Drop the shared task list and every member's detail view, which embeds
/// the tasks.
async fn invalidate_task_views(ctx: &ServiceContext, project_id: Uuid) -> Result<()> {
    let memberships = MembershipRepository::new(ctx.pool.clone());
    let member_ids = memberships.find_user_ids_by_project(project_id).await?;

    let mut keys_out = vec![keys::project_tasks(project_id)];
    keys_out.extend(invalidation::detail_keys(&member_ids, project_id));
    ctx.cache.invalidate(&keys_out).await;
    Ok(())
}
