pub mod capability;
pub mod effective_role;
pub mod invitation;
pub mod membership;
pub mod priority;
pub mod project;
pub mod role;
pub mod status;
pub mod task;
pub mod user;
