use huddle_service::MemberProfile;

use serde::Serialize;

/// Profile fields embedded in each roster entry
#[derive(Debug, Serialize)]
pub struct MemberProfileDto {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl From<MemberProfile> for MemberProfileDto {
    fn from(p: MemberProfile) -> Self {
        Self {
            id: p.id,
            email: p.email,
            name: p.name,
        }
    }
}
