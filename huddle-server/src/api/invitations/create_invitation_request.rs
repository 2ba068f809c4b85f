use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateInvitationRequest {
    /// Target project id (required)
    pub project_id: String,

    /// Invitee email address (required)
    pub email: String,

    /// Role token granted on acceptance: ADMIN, EDITOR or VIEWER
    pub role: String,
}
