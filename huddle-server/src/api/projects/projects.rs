//! Project REST API handlers
//!
//! Thin HTTP adapters over `huddle_service::projects`: parse and convert
//! the wire types, let the service own authorization and caching.

use crate::api::extractors::caller::Caller;
use crate::{
    ApiError, ApiResult, CreateProjectRequest, DeleteResponse, OverviewResponse,
    ProjectDetailResponse, ProjectListResponse, ProjectResponse, UpdateProjectRequest,
};
use crate::state::AppState;

use huddle_core::{Priority, Status};
use huddle_service::{NewProject, ProjectUpdate};

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

/// GET /api/v1/projects
///
/// List the projects the caller owns or belongs to, newest first
pub async fn list_projects(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = huddle_service::list_projects(&state.services, &caller).await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/v1/projects
///
/// Create a project owned by the caller
pub async fn create_project(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let input = NewProject {
        name: req.name,
        summary: req.summary,
        description: req.description,
        status: req.status.as_deref().map(str::parse::<Status>).transpose()?,
        priority: req
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?,
        start_date: parse_date("start_date", req.start_date)?,
        target_date: parse_date("target_date", req.target_date)?,
    };

    let project = huddle_service::create_project(&state.services, &caller, input).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// GET /api/v1/projects/:id
///
/// Get the caller's detail view of a project: project, roster, tasks and
/// the caller's own role
pub async fn get_project(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDetailResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let detail = huddle_service::get_project(&state.services, &caller, project_id).await?;

    Ok(Json(detail.into()))
}

/// PUT /api/v1/projects/:id
///
/// Replace the project's editable fields
pub async fn update_project(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let update = to_update(req)?;

    let project =
        huddle_service::update_project(&state.services, &caller, project_id, update).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// DELETE /api/v1/projects/:id
///
/// Delete the project and everything under it. Owner only.
pub async fn delete_project(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    huddle_service::delete_project(&state.services, &caller, project_id).await?;

    Ok(Json(DeleteResponse { deleted: true }))
}

/// GET /api/v1/projects/:id/overview
///
/// Get the shared overview fields of a project
pub async fn get_overview(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<OverviewResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let overview = huddle_service::get_overview(&state.services, &caller, project_id).await?;

    Ok(Json(OverviewResponse {
        overview: overview.into(),
    }))
}

/// PUT /api/v1/projects/:id/overview
///
/// Replace the overview fields and rewarm the shared overview entry
pub async fn update_overview(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<OverviewResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let update = to_update(req)?;

    let overview =
        huddle_service::update_overview(&state.services, &caller, project_id, update).await?;

    Ok(Json(OverviewResponse {
        overview: overview.into(),
    }))
}

// =============================================================================
// Conversions
// =============================================================================

/// Convert the replacement request into the service input, rejecting
/// unknown tokens and out-of-range timestamps.
fn to_update(req: UpdateProjectRequest) -> ApiResult<ProjectUpdate> {
    Ok(ProjectUpdate {
        name: req.name,
        summary: req.summary,
        description: req.description,
        status: req.status.parse::<Status>()?,
        priority: req.priority.parse::<Priority>()?,
        start_date: parse_date("start_date", req.start_date)?,
        target_date: parse_date("target_date", req.target_date)?,
    })
}

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
