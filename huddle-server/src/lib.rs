pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::Caller,
    invitations::{
        accept_invitation_request::AcceptInvitationRequest,
        accept_response::AcceptResponse,
        create_invitation_request::CreateInvitationRequest,
        invitation_dto::InvitationDto,
        invitation_response::InvitationResponse,
        invitations::{accept_invitation, create_invitation},
    },
    members::{
        member_dto::MemberDto,
        member_list_response::MemberListResponse,
        member_profile_dto::MemberProfileDto,
        member_response::MemberResponse,
        members::{list_members, remove_member, update_member_role},
        membership_dto::MembershipDto,
        update_member_role_request::UpdateMemberRoleRequest,
    },
    projects::{
        create_project_request::CreateProjectRequest,
        overview_dto::OverviewDto,
        overview_response::OverviewResponse,
        project_detail_response::ProjectDetailResponse,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{
            create_project, delete_project, get_overview, get_project, list_projects,
            update_overview, update_project,
        },
        update_project_request::UpdateProjectRequest,
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        tasks::{create_task, delete_task, list_tasks, update_task},
        update_task_request::UpdateTaskRequest,
    },
    users::{user_dto::UserDto, user_response::UserResponse, users::sync_user},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
