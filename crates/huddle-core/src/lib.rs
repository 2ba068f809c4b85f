pub mod error;
pub mod models;
pub mod sync;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::capability::Capability;
pub use models::effective_role::EffectiveRole;
pub use models::invitation::Invitation;
pub use models::membership::Membership;
pub use models::priority::Priority;
pub use models::project::Project;
pub use models::role::Role;
pub use models::status::Status;
pub use models::task::Task;
pub use models::user::User;
pub use sync::correlation_id::CorrelationId;
pub use sync::reconciler::Reconciler;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
