pub mod error;
pub mod handler;
pub mod use_cases;

pub use error::ApiError;
pub use handler::{TokenHandler, TokenResponse};
pub use use_cases::{
    IssueTokenError, IssueTokenUseCase, VerifyTokenError, VerifyTokenUseCase, accepts_body,
};
