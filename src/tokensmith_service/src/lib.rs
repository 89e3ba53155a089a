pub mod token_service;
pub mod tracing;

pub use token_service::TokenService;
