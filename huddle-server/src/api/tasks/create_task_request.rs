use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title (required)
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Status token, e.g. "TODO" (defaults to BACKLOG)
    #[serde(default)]
    pub status: Option<String>,

    /// Priority token, e.g. "URGENT" (defaults to NO_PRIORITY)
    #[serde(default)]
    pub priority: Option<String>,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub due_date: Option<i64>,
}
