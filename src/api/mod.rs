pub mod frank;
pub mod frank_dto;
pub mod tefas;
pub mod tefas_dto;
pub mod utils;
