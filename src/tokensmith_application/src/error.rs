use thiserror::Error;
use tokensmith_core::{CredentialError, Response, TokenError};

use crate::use_cases::{IssueTokenError, VerifyTokenError};

/// Every way an invocation can fail, mapped one-to-one onto a status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Unsupported media type")]
    UnsupportedMediaType,

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Missing credential")]
    MissingCredential,

    #[error("Malformed credential: {0}")]
    MalformedCredential(String),

    #[error("Token outside its validity window: {0}")]
    TemporalInvalidity(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound => 404,
            ApiError::MethodNotAllowed(_) => 405,
            ApiError::UnsupportedMediaType => 415,
            ApiError::UnprocessableEntity(_) => 422,
            ApiError::MissingCredential | ApiError::MalformedCredential(_) => 403,
            ApiError::TemporalInvalidity(_) => 401,
            ApiError::UnexpectedError(_) => 500,
        }
    }

    /// Failure responses carry no body.
    pub fn into_response(self) -> Response {
        Response::empty(self.status_code())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        if error.is_temporal() {
            ApiError::TemporalInvalidity(error.to_string())
        } else {
            ApiError::MalformedCredential(error.to_string())
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(error: CredentialError) -> Self {
        ApiError::MalformedCredential(error.to_string())
    }
}

impl From<IssueTokenError> for ApiError {
    fn from(error: IssueTokenError) -> Self {
        match error {
            IssueTokenError::MethodNotAllowed(method) => {
                ApiError::MethodNotAllowed(method.to_string())
            }
            IssueTokenError::UnsupportedMediaType => ApiError::UnsupportedMediaType,
            IssueTokenError::MissingBody | IssueTokenError::InvalidBody(_) => {
                ApiError::UnprocessableEntity(error.to_string())
            }
            IssueTokenError::EncodeError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<VerifyTokenError> for ApiError {
    fn from(error: VerifyTokenError) -> Self {
        match error {
            VerifyTokenError::MethodNotAllowed(method) => {
                ApiError::MethodNotAllowed(method.to_string())
            }
            VerifyTokenError::MissingCredential => ApiError::MissingCredential,
            VerifyTokenError::CredentialError(e) => e.into(),
            VerifyTokenError::TokenError(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}
