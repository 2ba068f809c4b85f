use crate::MemberProfileDto;

use huddle_service::MemberView;

use serde::Serialize;

/// Roster entry DTO: membership row plus the member's profile
#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub user: MemberProfileDto,
}

impl From<MemberView> for MemberDto {
    fn from(m: MemberView) -> Self {
        Self {
            id: m.id.to_string(),
            user_id: m.user_id,
            role: m.role.as_str().to_string(),
            user: m.user.into(),
        }
    }
}
