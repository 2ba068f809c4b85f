pub mod authorization;
pub mod context;
pub mod error;
pub mod invalidation;
pub mod invitations;
pub mod memberships;
pub mod projects;
pub mod tasks;
pub mod users;

pub use authorization::{require_capability, require_project, resolve_effective_role};
pub use context::{InviteSettings, ServiceContext};
pub use error::{Result, ServiceError};
pub use invitations::{
    AcceptedInvitation, InvitationRequest, accept_invitation, send_invitation,
};
pub use memberships::{
    MemberProfile, MemberView, list_members, remove_member, update_member_role,
};
pub use projects::{
    NewProject, ProjectDetail, ProjectOverview, ProjectUpdate, create_project, delete_project,
    get_overview, get_project, list_projects, update_overview, update_project,
};
pub use tasks::{NewTask, TaskUpdate, create_task, delete_task, list_tasks, update_task};
pub use users::sync_user;
