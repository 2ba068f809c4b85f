use serde::Deserialize;

/// Full replacement of a task's editable fields. Omitted optional fields
/// are cleared, not kept.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// Task title (required)
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Status token: BACKLOG, TODO, IN_PROGRESS or DONE
    pub status: String,

    /// Priority token: NO_PRIORITY, LOW, MEDIUM, HIGH or URGENT
    pub priority: String,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub due_date: Option<i64>,
}
