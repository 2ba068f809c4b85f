//! Task REST API handlers
//!
//! Task routes split between the owning project (list, create) and the
//! task itself (update, delete); the service resolves the project for the
//! latter before gating.

use crate::api::extractors::caller::Caller;
use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateTaskRequest, DeleteResponse, TaskListResponse, TaskResponse,
    UpdateTaskRequest,
};

use huddle_core::{Priority, Status};
use huddle_service::{NewTask, TaskUpdate};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects/:id/tasks
///
/// List the tasks of a project, oldest first
pub async fn list_tasks(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskListResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let tasks = huddle_service::list_tasks(&state.services, &caller, project_id).await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/v1/projects/:id/tasks
///
/// Create a task in the project. EDITOR and up.
pub async fn create_task(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let input = NewTask {
        title: req.title,
        description: req.description,
        status: req.status.as_deref().map(str::parse::<Status>).transpose()?,
        priority: req
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?,
        due_date: parse_date("due_date", req.due_date)?,
    };

    let task = huddle_service::create_task(&state.services, &caller, project_id, input).await?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// PUT /api/v1/tasks/:id
///
/// Replace a task's editable fields. EDITOR and up on the owning project.
pub async fn update_task(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let update = TaskUpdate {
        title: req.title,
        description: req.description,
        status: req.status.parse::<Status>()?,
        priority: req.priority.parse::<Priority>()?,
        due_date: parse_date("due_date", req.due_date)?,
    };

    let task = huddle_service::update_task(&state.services, &caller, task_id, update).await?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// DELETE /api/v1/tasks/:id
///
/// Delete a task. EDITOR and up on the owning project.
pub async fn delete_task(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    huddle_service::delete_task(&state.services, &caller, task_id).await?;

    Ok(Json(DeleteResponse { deleted: true }))
}

// =============================================================================
// Conversions
// =============================================================================

/// Convert an optional unix timestamp into a DateTime, rejecting values
/// chrono cannot represent.
fn parse_date(field: &str, value: Option<i64>) -> ApiResult<Option<DateTime<Utc>>> {
    let Some(secs) = value else {
        return Ok(None);
    };

    let date = DateTime::from_timestamp(secs, 0).ok_or_else(|| ApiError::Validation {
        message: format!("Invalid {field} timestamp: {secs}"),
        field: Some(field.into()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Some(date))
}
