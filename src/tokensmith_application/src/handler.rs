use serde::Serialize;
use tokensmith_core::{
    Clock, InvocationContext, NormalizedRequest, Request, Response, Route, SignedToken,
    TokenEngine,
};

use crate::{
    error::ApiError,
    use_cases::{IssueTokenUseCase, VerifyTokenUseCase},
};

/// Body of a successful `POST /token`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: SignedToken,
}

/// The invocation entry point: one request in, one response out.
///
/// Holds only immutable state, so a single instance can serve any number of
/// concurrent invocations behind an `Arc`.
pub struct TokenHandler<E, C> {
    token_engine: E,
    clock: C,
}

impl<E, C> TokenHandler<E, C>
where
    E: TokenEngine,
    C: Clock,
{
    pub fn new(token_engine: E, clock: C) -> Self {
        Self {
            token_engine,
            clock,
        }
    }

    /// Handle one invocation.
    ///
    /// Never fails: every rejection is turned into a response with the
    /// matching status code.
    #[tracing::instrument(
        name = "TokenHandler::handle",
        skip_all,
        fields(
            request_id = %context.request_id,
            method = %request.method,
            path = %request.path,
        )
    )]
    pub fn handle(&self, request: &Request, context: &InvocationContext) -> Response {
        let now = self.clock.now();
        let request = request.normalize();

        let result = match request.route {
            Route::Issue => self.issue(&request, now),
            Route::Verify => self.verify(&request, now),
            Route::NotFound => Err(ApiError::NotFound),
        };

        match result {
            Ok(response) => {
                tracing::info!(status = response.status_code, "Request handled");
                response
            }
            Err(error @ ApiError::UnexpectedError(_)) => {
                tracing::error!(status = error.status_code(), %error, "Request failed");
                error.into_response()
            }
            Err(error) => {
                tracing::warn!(status = error.status_code(), %error, "Request rejected");
                error.into_response()
            }
        }
    }

    fn issue(&self, request: &NormalizedRequest<'_>, now: i64) -> Result<Response, ApiError> {
        let token = IssueTokenUseCase::new(&self.token_engine).execute(request, now)?;

        Ok(Response::json(201, &TokenResponse { token })?)
    }

    fn verify(&self, request: &NormalizedRequest<'_>, now: i64) -> Result<Response, ApiError> {
        let data = VerifyTokenUseCase::new(&self.token_engine).execute(request, now)?;

        Ok(Response::json(200, &data)?)
    }
}
