pub mod ack_dto;
pub mod error_dto;
pub mod health_dto;
pub mod info_dto;
