pub mod create_project_request;
pub mod overview_dto;
pub mod overview_response;
pub mod project_detail_response;
pub mod project_dto;
pub mod project_list_response;
pub mod project_response;
pub mod projects;
pub mod update_project_request;
