use crate::MemberDto;
use serde::Serialize;

/// Member roster response
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberDto>,
}
