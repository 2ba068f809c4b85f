use huddle_core::{Invitation, Membership, Project, Role, Task, User};
use huddle_db::{ProjectRepository, UserRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates a test User keyed by an identity-provider style subject
pub fn test_user(id: &str) -> User {
    User::new(
        id.to_string(),
        format!("{}@example.com", id),
        Some(format!("User {}", id)),
    )
}

/// Creates a test Project with sensible defaults
pub fn test_project(owner_id: &str) -> Project {
    Project::new("Test Project".to_string(), owner_id.to_string())
}

/// Creates a test Membership
pub fn test_membership(user_id: &str, project_id: Uuid, role: Role) -> Membership {
    Membership::new(user_id.to_string(), project_id, role)
}

/// Creates a test Invitation with a unique token
pub fn test_invitation(email: &str, project_id: Uuid, role: Role) -> Invitation {
    let token = Uuid::new_v4().simple().to_string();
    Invitation::new(email.to_string(), project_id, token, role)
}

/// Creates a test Task
pub fn test_task(project_id: Uuid) -> Task {
    Task::new("Test Task".to_string(), project_id)
}

/// Inserts a user row so foreign keys hold
pub async fn insert_user(pool: &SqlitePool, id: &str) -> User {
    let user = test_user(id);
    UserRepository::new(pool.clone())
        .upsert(&user)
        .await
        .expect("Failed to insert test user");
    user
}

/// Inserts a user and a project they own
pub async fn insert_project(pool: &SqlitePool, owner_id: &str) -> Project {
    insert_user(pool, owner_id).await;
    let project = test_project(owner_id);
    ProjectRepository::new(pool.clone())
        .create(&project)
        .await
        .expect("Failed to insert test project");
    project
}
