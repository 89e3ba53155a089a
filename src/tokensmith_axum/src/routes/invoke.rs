//! Axum catch-all route that forwards every request to the token handler.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    response::IntoResponse,
};
use tokensmith_application::TokenHandler;
use tokensmith_core::{Clock, InvocationContext, TokenEngine};
use uuid::Uuid;

use crate::adapters::{AxumRequest, AxumResponse};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Axum route for all paths.
///
/// The handler decides between issue, verify and not-found, so this route is
/// mounted as the router fallback.
#[tracing::instrument(name = "Invoke", skip_all)]
pub async fn invoke<E, C>(
    State(handler): State<Arc<TokenHandler<E, C>>>,
    request: Request,
) -> axum::response::Response
where
    E: TokenEngine + 'static,
    C: Clock + 'static,
{
    let context = InvocationContext::new(request_id(&request));

    match AxumRequest(request).into_request().await {
        Ok(request) => AxumResponse(handler.handle(&request, &context)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Request rejected before handling");
            e.into_response()
        }
    }
}

fn request_id(request: &Request) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
