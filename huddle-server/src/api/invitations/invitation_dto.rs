use huddle_core::Invitation;

use serde::Serialize;

/// Invitation DTO for JSON serialization.
///
/// The acceptance token travels only inside the email; responses never
/// carry it.
#[derive(Debug, Serialize)]
pub struct InvitationDto {
    pub id: String,
    pub email: String,
    pub project_id: String,
    pub role: String,
    pub accepted: bool,
    pub created_at: i64,
}

impl From<Invitation> for InvitationDto {
    fn from(i: Invitation) -> Self {
        Self {
            id: i.id.to_string(),
            email: i.email,
            project_id: i.project_id.to_string(),
            role: i.role.as_str().to_string(),
            accepted: i.accepted,
            created_at: i.created_at.timestamp(),
        }
    }
}
