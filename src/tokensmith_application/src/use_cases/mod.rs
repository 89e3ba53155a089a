pub mod issue_token;
pub mod verify_token;

pub use issue_token::{IssueTokenError, IssueTokenUseCase, accepts_body};
pub use verify_token::{VerifyTokenError, VerifyTokenUseCase};

pub const CONTENT_TYPE_HEADER: &str = "content-type";
pub const AUTHORIZATION_HEADER: &str = "authorization";
pub const JSON_MEDIA_TYPE: &str = "application/json";
