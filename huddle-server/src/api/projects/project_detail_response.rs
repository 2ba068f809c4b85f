use crate::{MemberDto, ProjectDto, TaskDto};

use huddle_service::ProjectDetail;

use serde::Serialize;

/// Project detail response: the project plus its roster, its tasks and the
/// role the requesting user holds on it.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub project: ProjectDto,
    pub members: Vec<MemberDto>,
    pub tasks: Vec<TaskDto>,
    pub current_user_role: String,
}

impl From<ProjectDetail> for ProjectDetailResponse {
    fn from(detail: ProjectDetail) -> Self {
        Self {
            project: detail.project.into(),
            members: detail.members.into_iter().map(MemberDto::from).collect(),
            tasks: detail.tasks.into_iter().map(TaskDto::from).collect(),
            current_user_role: detail.current_user_role.as_str().to_string(),
        }
    }
}
