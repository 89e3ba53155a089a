use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tokensmith_application::{ApiError, TokenHandler};
use tokensmith_core::{Clock, InvocationContext, Method, Request, Response, Route, TokenEngine};

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("Invalid invocation event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}

/// Handle one JSON invocation event and return the JSON response.
///
/// The event carries `httpMethod`, `path`, `headers` and `body`; the response
/// is `{"statusCode": ..., "body": ...}`.
///
/// # Errors
///
/// Returns [`InvocationError::InvalidEvent`] if the event is not JSON or lacks
/// a string method and path. Everything request-shaped gets a response: an
/// unknown method answers 404 or 405 by route, and other request-level
/// failures come back with their 4xx status.
pub fn handle_event<E, C>(
    handler: &TokenHandler<E, C>,
    event: &str,
    context: &InvocationContext,
) -> Result<String, InvocationError>
where
    E: TokenEngine,
    C: Clock,
{
    let event: Value = serde_json::from_str(event)?;

    let response = match Request::deserialize(&event) {
        Ok(request) => handler.handle(&request, context),
        Err(error) => unsupported_method(&event).ok_or(error)?,
    };

    Ok(serde_json::to_string(&response)?)
}

fn unsupported_method(event: &Value) -> Option<Response> {
    let method = event
        .get("httpMethod")
        .or_else(|| event.get("method"))?
        .as_str()?;
    let path = event.get("path")?.as_str()?;

    if method.parse::<Method>().is_ok() {
        return None;
    }

    let error = match Route::classify(path) {
        Route::NotFound => ApiError::NotFound,
        Route::Issue | Route::Verify => ApiError::MethodNotAllowed(method.to_string()),
    };
    tracing::warn!(status = error.status_code(), %error, "Unsupported method in event");

    Some(error.into_response())
}
