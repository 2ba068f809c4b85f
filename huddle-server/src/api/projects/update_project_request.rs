use serde::Deserialize;

/// Full replacement of a project's editable fields. Omitted optional
/// fields are cleared, not kept.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    /// Project name (required)
    pub name: String,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Status token: BACKLOG, TODO, IN_PROGRESS or DONE
    pub status: String,

    /// Priority token: NO_PRIORITY, LOW, MEDIUM, HIGH or URGENT
    pub priority: String,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub start_date: Option<i64>,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub target_date: Option<i64>,
}
