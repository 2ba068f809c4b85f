use crate::{DbError, Result as DbErrorResult};

use huddle_core::{Priority, Project, Status};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, name, summary, description, status, priority,
                    start_date, target_date, owner_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.summary)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.priority.as_str())
        .bind(project.start_date.map(|dt| dt.timestamp()))
        .bind(project.target_date.map(|dt| dt.timestamp()))
        .bind(&project.owner_id)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, summary, description, status, priority,
                       start_date, target_date, owner_id, created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_project_row(&r)).transpose()
    }

    /// Projects visible to a user, newest first. Visibility comes from a
    /// membership row; the owner has one from project creation.
    pub async fn find_by_member(&self, user_id: &str) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT p.id, p.name, p.summary, p.description, p.status, p.priority,
                       p.start_date, p.target_date, p.owner_id, p.created_at, p.updated_at
                FROM projects p
                JOIN memberships m ON m.project_id = p.id
                WHERE m.user_id = ?
                ORDER BY p.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_project_row).collect()
    }

    pub async fn update(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE projects
                SET name = ?, summary = ?, description = ?, status = ?, priority = ?,
                    start_date = ?, target_date = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(&project.summary)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.priority.as_str())
        .bind(project.start_date.map(|dt| dt.timestamp()))
        .bind(project.target_date.map(|dt| dt.timestamp()))
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Hard delete. Memberships, invitations and tasks go with it via
    /// foreign key cascade.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_project_row(row: &SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let status: String = row.try_get("status")?;
    let priority: String = row.try_get("priority")?;
    let start_date: Option<i64> = row.try_get("start_date")?;
    let target_date: Option<i64> = row.try_get("target_date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Project {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in projects.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: row.try_get("name")?,
        summary: row.try_get("summary")?,
        description: row.try_get("description")?,
        status: Status::from_str(&status).map_err(|_| DbError::Initialization {
            message: format!("Invalid status in projects.status: {}", status),
            location: ErrorLocation::from(Location::caller()),
        })?,
        priority: Priority::from_str(&priority).map_err(|_| DbError::Initialization {
            message: format!("Invalid priority in projects.priority: {}", priority),
            location: ErrorLocation::from(Location::caller()),
        })?,
        start_date: start_date.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        target_date: target_date.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        owner_id: row.try_get("owner_id")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in projects.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in projects.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
