pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::invitation_repository::InvitationRepository;
pub use repositories::membership_repository::{MemberRecord, MembershipRepository};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;
