use crate::{DbError, Result as DbErrorResult};

use huddle_core::{Priority, Status, Task};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO tasks (
                    id, title, description, status, priority, due_date,
                    project_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.due_date.map(|dt| dt.timestamp()))
        .bind(task.project_id.to_string())
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let row = sqlx::query(
            r#"
                SELECT id, title, description, status, priority, due_date,
                       project_id, created_at, updated_at
                FROM tasks
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_task_row(&r)).transpose()
    }

    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(
            r#"
                SELECT id, title, description, status, priority, due_date,
                       project_id, created_at, updated_at
                FROM tasks
                WHERE project_id = ?
                ORDER BY created_at ASC
            "#,
        )
        .bind(project_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_task_row).collect()
    }

    pub async fn update(&self, task: &Task) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE tasks
                SET title = ?, description = ?, status = ?, priority = ?,
                    due_date = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.due_date.map(|dt| dt.timestamp()))
        .bind(task.updated_at.timestamp())
        .bind(task.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_task_row(row: &SqliteRow) -> DbErrorResult<Task> {
    let id: String = row.try_get("id")?;
    let project_id: String = row.try_get("project_id")?;
    let status: String = row.try_get("status")?;
    let priority: String = row.try_get("priority")?;
    let due_date: Option<i64> = row.try_get("due_date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Task {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in tasks.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: Status::from_str(&status).map_err(|_| DbError::Initialization {
            message: format!("Invalid status in tasks.status: {}", status),
            location: ErrorLocation::from(Location::caller()),
        })?,
        priority: Priority::from_str(&priority).map_err(|_| DbError::Initialization {
            message: format!("Invalid priority in tasks.priority: {}", priority),
            location: ErrorLocation::from(Location::caller()),
        })?,
        due_date: due_date.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        project_id: Uuid::parse_str(&project_id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in tasks.project_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in tasks.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in tasks.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
