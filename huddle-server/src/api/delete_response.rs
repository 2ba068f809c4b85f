use serde::Serialize;

/// Acknowledgement body for delete endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
