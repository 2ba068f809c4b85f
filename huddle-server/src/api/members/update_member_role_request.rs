use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRoleRequest {
    /// Role token: ADMIN, EDITOR or VIEWER
    pub role: String,
}
