use huddle_core::Project;

use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub start_date: Option<i64>,
    pub target_date: Option<i64>,
    pub owner_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            summary: p.summary,
            description: p.description,
            status: p.status.as_str().to_string(),
            priority: p.priority.as_str().to_string(),
            start_date: p.start_date.map(|d| d.timestamp()),
            target_date: p.target_date.map(|d| d.timestamp()),
            owner_id: p.owner_id,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
