use crate::{DbError, Result as DbErrorResult};

use huddle_core::{Membership, Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Membership joined with the member's user profile, for member listings.
#[derive(Debug, Clone)]
pub struct MemberRecord {
    pub membership: Membership,
    pub user: User,
}

pub struct MembershipRepository {
    pool: SqlitePool,
}

impl MembershipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, membership: &Membership) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO memberships (id, user_id, project_id, role, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(membership.id.to_string())
        .bind(&membership.user_id)
        .bind(membership.project_id.to_string())
        .bind(membership.role.as_str())
        .bind(membership.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Membership>> {
        let row = sqlx::query(
            r#"
                SELECT id, user_id, project_id, role, created_at
                FROM memberships
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_membership_row(&r)).transpose()
    }

    pub async fn find_by_user_and_project(
        &self,
        user_id: &str,
        project_id: Uuid,
    ) -> DbErrorResult<Option<Membership>> {
        let row = sqlx::query(
            r#"
                SELECT id, user_id, project_id, role, created_at
                FROM memberships
                WHERE user_id = ? AND project_id = ?
            "#,
        )
        .bind(user_id)
        .bind(project_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_membership_row(&r)).transpose()
    }

    /// Members with their user profiles, longest-standing first.
    pub async fn find_by_project_with_users(
        &self,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<MemberRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT m.id, m.user_id, m.project_id, m.role, m.created_at,
                       u.email AS user_email, u.name AS user_name,
                       u.created_at AS user_created_at
                FROM memberships m
                JOIN users u ON u.id = m.user_id
                WHERE m.project_id = ?
                ORDER BY m.created_at ASC
            "#,
        )
        .bind(project_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| {
                let membership = map_membership_row(r)?;
                let user_created_at: i64 = r.try_get("user_created_at")?;

                let user = User {
                    id: membership.user_id.clone(),
                    email: r.try_get("user_email")?,
                    name: r.try_get("user_name")?,
                    created_at: DateTime::from_timestamp(user_created_at, 0).ok_or_else(
                        || DbError::Initialization {
                            message: "Invalid timestamp in users.created_at".to_string(),
                            location: ErrorLocation::from(Location::caller()),
                        },
                    )?,
                };

                Ok(MemberRecord { membership, user })
            })
            .collect()
    }

    /// User ids of every member, for cache invalidation fan-out.
    pub async fn find_user_ids_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<String>> {
        let rows = sqlx::query("SELECT user_id FROM memberships WHERE project_id = ?")
            .bind(project_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| r.try_get::<String, _>("user_id").map_err(DbError::from))
            .collect()
    }

    pub async fn update_role(&self, id: Uuid, role: Role) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE memberships SET role = ? WHERE id = ?")
            .bind(role.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM memberships WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_membership_row(row: &SqliteRow) -> DbErrorResult<Membership> {
    let id: String = row.try_get("id")?;
    let project_id: String = row.try_get("project_id")?;
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Membership {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in memberships.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        user_id: row.try_get("user_id")?,
        project_id: Uuid::parse_str(&project_id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in memberships.project_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        role: Role::from_str(&role).map_err(|_| DbError::Initialization {
            message: format!("Invalid role in memberships.role: {}", role),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in memberships.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
