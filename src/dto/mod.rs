pub mod application_dto;
pub mod view_dto;
