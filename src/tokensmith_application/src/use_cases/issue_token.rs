use serde_json::Value;
use tokensmith_core::{
    EncodeError, Headers, Method, NormalizedRequest, Route, SignedToken, TokenEngine,
};

use super::{CONTENT_TYPE_HEADER, JSON_MEDIA_TYPE};

/// Error types for the issue token use case
#[derive(Debug, thiserror::Error)]
pub enum IssueTokenError {
    #[error("Method {0} is not allowed, expected POST")]
    MethodNotAllowed(Method),
    #[error("Content type must be application/json")]
    UnsupportedMediaType,
    #[error("Request body is missing")]
    MissingBody,
    #[error("Request body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("{0}")]
    EncodeError(#[from] EncodeError),
}

/// True when `request` passes every issue check that comes before the body:
/// route, method and content type. No other request ever reads its body.
pub fn accepts_body(request: &NormalizedRequest<'_>) -> bool {
    request.route == Route::Issue && request.method == Method::Post && is_json(&request.headers)
}

fn is_json(headers: &Headers) -> bool {
    headers
        .get(CONTENT_TYPE_HEADER)
        .is_some_and(|content_type| content_type.eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}

/// Issue token use case - signs the request body into a short-lived token
pub struct IssueTokenUseCase<'a, E>
where
    E: TokenEngine,
{
    token_engine: &'a E,
}

impl<'a, E> IssueTokenUseCase<'a, E>
where
    E: TokenEngine,
{
    pub fn new(token_engine: &'a E) -> Self {
        Self { token_engine }
    }

    /// Execute the issue token use case
    ///
    /// Preconditions are checked in order: method, content type, body.
    ///
    /// # Arguments
    /// * `request` - The normalized request
    /// * `now` - The invocation's clock reading
    ///
    /// # Returns
    /// The signed token, or the first failed precondition
    #[tracing::instrument(name = "IssueTokenUseCase::execute", skip_all)]
    pub fn execute(
        &self,
        request: &NormalizedRequest<'_>,
        now: i64,
    ) -> Result<SignedToken, IssueTokenError> {
        if request.method != Method::Post {
            return Err(IssueTokenError::MethodNotAllowed(request.method));
        }

        if !is_json(&request.headers) {
            return Err(IssueTokenError::UnsupportedMediaType);
        }

        let body = request.body.ok_or(IssueTokenError::MissingBody)?;
        let payload: Value = serde_json::from_str(body)?;

        Ok(self.token_engine.encode(payload, now)?)
    }
}
