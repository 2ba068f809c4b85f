use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name (required)
    pub name: String,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Status token, e.g. "BACKLOG" (defaults to BACKLOG)
    #[serde(default)]
    pub status: Option<String>,

    /// Priority token, e.g. "HIGH" (defaults to NO_PRIORITY)
    #[serde(default)]
    pub priority: Option<String>,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub start_date: Option<i64>,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub target_date: Option<i64>,
}
