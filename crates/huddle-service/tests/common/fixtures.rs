use huddle_auth::AuthUser;
use huddle_core::{Membership, Project, Role};
use huddle_db::MembershipRepository;
use huddle_service::{NewProject, ServiceContext, create_project, sync_user};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Authenticated identity with a derived example.com address
pub fn auth_user(id: &str) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        name: Some(format!("User {id}")),
    }
}

/// Authenticated identity with an explicit address
pub fn auth_user_with_email(id: &str, email: &str) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        email: email.to_string(),
        name: Some(format!("User {id}")),
    }
}

/// Creates a project owned by `owner` through the service path
pub async fn seed_project(ctx: &ServiceContext, owner: &AuthUser, name: &str) -> Project {
    create_project(
        ctx,
        owner,
        NewProject {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to seed project")
}

/// Syncs `user` and grants them `role` on the project directly
pub async fn add_member(
    ctx: &ServiceContext,
    user: &AuthUser,
    project_id: Uuid,
    role: Role,
) -> Membership {
    sync_user(ctx, user).await.expect("Failed to sync member");

    let membership = Membership::new(user.id.clone(), project_id, role);
    MembershipRepository::new(ctx.pool.clone())
        .create(&membership)
        .await
        .expect("Failed to add member");
    membership
}

/// Rewinds an invitation's created_at by `secs`, for duplicate-window tests
pub async fn backdate_invitation(pool: &SqlitePool, id: Uuid, secs: i64) {
    sqlx::query("UPDATE invitations SET created_at = created_at - ? WHERE id = ?")
        .bind(secs)
        .bind(id.to_string())
        .execute(pool)
        .await
        .expect("Failed to backdate invitation");
}

/// Rewinds a task's created_at by `secs`, so same-second rows get a
/// deterministic order
pub async fn backdate_task(pool: &SqlitePool, id: Uuid, secs: i64) {
    sqlx::query("UPDATE tasks SET created_at = created_at - ? WHERE id = ?")
        .bind(secs)
        .bind(id.to_string())
        .execute(pool)
        .await
        .expect("Failed to backdate task");
}

/// Number of membership rows for (user, project), bypassing uniqueness
pub async fn membership_count(pool: &SqlitePool, user_id: &str, project_id: Uuid) -> i64 {
    use sqlx::Row;

    let row = sqlx::query(
        "SELECT COUNT(*) AS count FROM memberships WHERE user_id = ? AND project_id = ?",
    )
    .bind(user_id)
    .bind(project_id.to_string())
    .fetch_one(pool)
    .await
    .expect("Failed to count memberships");

    row.try_get("count").expect("Failed to read count")
}

/// Number of invitation rows for (email, project)
pub async fn invitation_count(pool: &SqlitePool, email: &str, project_id: Uuid) -> i64 {
    use sqlx::Row;

    let row = sqlx::query(
        "SELECT COUNT(*) AS count FROM invitations WHERE email = ? COLLATE NOCASE AND project_id = ?",
    )
    .bind(email)
    .bind(project_id.to_string())
    .fetch_one(pool)
    .await
    .expect("Failed to count invitations");

    row.try_get("count").expect("Failed to read count")
}
