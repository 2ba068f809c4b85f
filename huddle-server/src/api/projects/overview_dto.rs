use huddle_service::ProjectOverview;

use serde::Serialize;

/// Project overview DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct OverviewDto {
    pub id: String,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub start_date: Option<i64>,
    pub target_date: Option<i64>,
}

impl From<ProjectOverview> for OverviewDto {
    fn from(o: ProjectOverview) -> Self {
        Self {
            id: o.id.to_string(),
            name: o.name,
            summary: o.summary,
            description: o.description,
            status: o.status.as_str().to_string(),
            priority: o.priority.as_str().to_string(),
            start_date: o.start_date.map(|d| d.timestamp()),
            target_date: o.target_date.map(|d| d.timestamp()),
        }
    }
}
