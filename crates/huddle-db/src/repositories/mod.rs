pub mod invitation_repository;
pub mod membership_repository;
pub mod project_repository;
pub mod task_repository;
pub mod user_repository;
