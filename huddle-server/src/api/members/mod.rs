pub mod member_dto;
pub mod member_list_response;
pub mod member_profile_dto;
pub mod member_response;
pub mod members;
pub mod membership_dto;
pub mod update_member_role_request;
