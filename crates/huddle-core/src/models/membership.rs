use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grants a user a role on a project. Unique per (user, project).
///
/// The owner also carries an ADMIN membership row, created with the
/// project, so role lookups stay uniform; that row is immune to removal
/// and role changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: Uuid,
    pub user_id: String,
    pub project_id: Uuid,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    pub fn new(user_id: String, project_id: Uuid, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            project_id,
            role,
            created_at: Utc::now(),
        }
    }
}
