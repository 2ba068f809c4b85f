pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod invitations;
pub mod members;
pub mod projects;
pub mod tasks;
pub mod users;
