use serde::Serialize;

/// Successful acceptance response, pointing the client at the project
#[derive(Debug, Serialize)]
pub struct AcceptResponse {
    pub project_id: String,
}
