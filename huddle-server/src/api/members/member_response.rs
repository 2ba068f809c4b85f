use crate::MembershipDto;
use serde::Serialize;

/// Single membership response
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member: MembershipDto,
}
