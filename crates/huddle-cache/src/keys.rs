//! Cache key builders.
//!
//! Keys are namespaced per user or per project so invalidation after a write
//! can name exactly the entries the write made stale.

use uuid::Uuid;

/// Project list as seen by one user
pub fn user_projects(user_id: &str) -> String {
    format!("user:{user_id}:projects")
}

/// Project detail as seen by one user (role-dependent payload)
pub fn user_project(user_id: &str, project_id: Uuid) -> String {
    format!("user:{user_id}:projects:{project_id}")
}

/// Project overview document, shared by all members
pub fn project_overview(project_id: Uuid) -> String {
    format!("project:{project_id}:overview")
}

/// Member roster, shared by all members
pub fn project_members(project_id: Uuid) -> String {
    format!("project:{project_id}:members")
}

/// Task list, shared by all members
pub fn project_tasks(project_id: Uuid) -> String {
    format!("project:{project_id}:tasks")
}
