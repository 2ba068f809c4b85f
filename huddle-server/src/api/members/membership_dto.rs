use huddle_core::Membership;

use serde::Serialize;

/// Bare membership row DTO, returned by role changes
#[derive(Debug, Serialize)]
pub struct MembershipDto {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub role: String,
    pub created_at: i64,
}

impl From<Membership> for MembershipDto {
    fn from(m: Membership) -> Self {
        Self {
            id: m.id.to_string(),
            user_id: m.user_id,
            project_id: m.project_id.to_string(),
            role: m.role.as_str().to_string(),
            created_at: m.created_at.timestamp(),
        }
    }
}
