use serde_json::Value;
use tokensmith_core::{
    BearerCredential, CredentialError, Method, NormalizedRequest, TokenEngine, TokenError,
};

use super::AUTHORIZATION_HEADER;

/// Error types for the verify token use case
#[derive(Debug, thiserror::Error)]
pub enum VerifyTokenError {
    #[error("Method {0} is not allowed, expected GET")]
    MethodNotAllowed(Method),
    #[error("Missing authorization header")]
    MissingCredential,
    #[error("{0}")]
    CredentialError(#[from] CredentialError),
    #[error("{0}")]
    TokenError(#[from] TokenError),
}

/// Verify token use case - checks a bearer token and returns its data
pub struct VerifyTokenUseCase<'a, E>
where
    E: TokenEngine,
{
    token_engine: &'a E,
}

impl<'a, E> VerifyTokenUseCase<'a, E>
where
    E: TokenEngine,
{
    pub fn new(token_engine: &'a E) -> Self {
        Self { token_engine }
    }

    /// Execute the verify token use case
    ///
    /// Runs the verification chain: method, header present, bearer scheme,
    /// then signature and validity window. The first failing step wins.
    #[tracing::instrument(name = "VerifyTokenUseCase::execute", skip_all)]
    pub fn execute(
        &self,
        request: &NormalizedRequest<'_>,
        now: i64,
    ) -> Result<Value, VerifyTokenError> {
        if request.method != Method::Get {
            return Err(VerifyTokenError::MethodNotAllowed(request.method));
        }

        let authorization = request
            .headers
            .get(AUTHORIZATION_HEADER)
            .ok_or(VerifyTokenError::MissingCredential)?;

        let credential = BearerCredential::parse(authorization)?;

        Ok(self.token_engine.decode(credential.token(), now)?)
    }
}
