use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AcceptInvitationRequest {
    /// Acceptance token from the invitation email (required)
    pub token: String,
}
