use crate::InvitationDto;
use serde::Serialize;

/// Single invitation response
#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub invitation: InvitationDto,
}
