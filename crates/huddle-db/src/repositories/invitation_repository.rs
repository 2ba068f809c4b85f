use crate::{DbError, Result as DbErrorResult};

use huddle_core::{Invitation, Role};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct InvitationRepository {
    pool: SqlitePool,
}

impl InvitationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, invitation: &Invitation) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO invitations (id, email, project_id, token, role, accepted, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(invitation.id.to_string())
        .bind(&invitation.email)
        .bind(invitation.project_id.to_string())
        .bind(&invitation.token)
        .bind(invitation.role.as_str())
        .bind(invitation.accepted)
        .bind(invitation.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_token(&self, token: &str) -> DbErrorResult<Option<Invitation>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, project_id, token, role, accepted, created_at
                FROM invitations
                WHERE token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_invitation_row(&r)).transpose()
    }

    /// Latest unaccepted invitation for this address and project, if any.
    /// Email comparison ignores case, matching the acceptance check.
    pub async fn find_pending(
        &self,
        email: &str,
        project_id: Uuid,
    ) -> DbErrorResult<Option<Invitation>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, project_id, token, role, accepted, created_at
                FROM invitations
                WHERE email = ? COLLATE NOCASE AND project_id = ? AND accepted = 0
                ORDER BY created_at DESC
                LIMIT 1
            "#,
        )
        .bind(email)
        .bind(project_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_invitation_row(&r)).transpose()
    }

    /// Flip `accepted` exactly once. Returns false when the invitation
    /// was missing or already accepted.
    pub async fn mark_accepted(&self, id: Uuid) -> DbErrorResult<bool> {
        let result =
            sqlx::query("UPDATE invitations SET accepted = 1 WHERE id = ? AND accepted = 0")
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM invitations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_invitation_row(row: &SqliteRow) -> DbErrorResult<Invitation> {
    let id: String = row.try_get("id")?;
    let project_id: String = row.try_get("project_id")?;
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Invitation {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in invitations.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: row.try_get("email")?,
        project_id: Uuid::parse_str(&project_id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in invitations.project_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        token: row.try_get("token")?,
        role: Role::from_str(&role).map_err(|_| DbError::Initialization {
            message: format!("Invalid role in invitations.role: {}", role),
            location: ErrorLocation::from(Location::caller()),
        })?,
        accepted: row.try_get("accepted")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in invitations.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
