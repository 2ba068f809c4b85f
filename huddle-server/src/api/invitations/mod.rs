pub mod accept_invitation_request;
pub mod accept_response;
pub mod create_invitation_request;
pub mod invitation_dto;
pub mod invitation_response;
pub mod invitations;
