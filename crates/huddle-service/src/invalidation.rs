//! Key-set builders for delete-on-write cache invalidation.
//!
//! Every mutation assembles the keys its write made stale and deletes them
//! before returning. Per-user views (project lists and details) fan out
//! across the whole member roster, not just the caller.

use huddle_cache::keys;
use uuid::Uuid;

/// `user:{id}:projects` for each given user
pub fn list_keys(user_ids: &[String]) -> Vec<String> {
    user_ids.iter().map(|id| keys::user_projects(id)).collect()
}

/// `user:{id}:projects:{project}` for each given user
pub fn detail_keys(user_ids: &[String], project_id: Uuid) -> Vec<String> {
    user_ids
        .iter()
        .map(|id| keys::user_project(id, project_id))
        .collect()
}

/// Every key family derived from one project: the shared overview, member
/// and task views plus each member's list and detail. Used when the project
/// itself changes or disappears.
pub fn all_project_keys(user_ids: &[String], project_id: Uuid) -> Vec<String> {
    let mut keys_out = vec![
        keys::project_overview(project_id),
        keys::project_members(project_id),
        keys::project_tasks(project_id),
    ];
    keys_out.extend(list_keys(user_ids));
    keys_out.extend(detail_keys(user_ids, project_id));
    keys_out
}
