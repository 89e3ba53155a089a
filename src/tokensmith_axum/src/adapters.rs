//! Axum framework adapters.
//!
//! Newtype wrappers convert between Axum's request/response types and the
//! core `Request`/`Response` without touching the orphan rule.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(axum::extract::Request)       │
//! │        └── into_request() ──► core Request │
//! └────────────────────────────────────────────┘
//! ┌────────────────────────────────────────────┐
//! │  AxumResponse(core Response)               │
//! │        └── impl IntoResponse               │
//! └────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request as AxumExtractRequest, rejection::BytesRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use thiserror::Error;
use tokensmith_application::accepts_body;
use tokensmith_core::{Method, Request, Response, Route};

/// Largest request body the service buffers, in bytes.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Newtype wrapper around Axum's request type.
#[repr(transparent)]
pub struct AxumRequest(pub AxumExtractRequest);

impl From<AxumExtractRequest> for AxumRequest {
    fn from(req: AxumExtractRequest) -> Self {
        AxumRequest(req)
    }
}

impl From<AxumRequest> for AxumExtractRequest {
    fn from(wrapper: AxumRequest) -> Self {
        wrapper.0
    }
}

/// Errors raised before a request reaches the handler.
#[derive(Debug, Error)]
pub enum AxumAdapterError {
    /// The method is outside the set the handler understands. `route` keeps
    /// unknown paths answering 404 rather than 405.
    #[error("Unsupported HTTP method {method} for {route:?} route")]
    UnsupportedMethod { method: String, route: Route },
    #[error("Failed to read request body: {0}")]
    Body(#[from] BytesRejection),
}

impl AxumRequest {
    /// Convert into a core request.
    ///
    /// Headers that are not valid UTF-8 are dropped. The body is only buffered
    /// for a `POST /token` with a JSON content type; every other request is
    /// answered from its method, path and headers, so it never hits the body
    /// limit. An empty body becomes `None`; a non-UTF-8 body is converted
    /// lossily and will fail JSON parsing.
    pub async fn into_request(self) -> Result<Request, AxumAdapterError> {
        let (parts, body) = self.0.into_parts();
        let path = parts.uri.path().to_string();

        let method = parts.method.as_str().parse::<Method>().map_err(|_| {
            AxumAdapterError::UnsupportedMethod {
                method: parts.method.to_string(),
                route: Route::classify(&path),
            }
        })?;

        let headers: BTreeMap<String, String> = parts
            .headers
            .iter()
            .filter_map(|(name, value)| {
                Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
            })
            .collect();

        let mut request = Request {
            method,
            path,
            headers,
            body: None,
        };

        if accepts_body(&request.normalize()) {
            let bytes =
                Bytes::from_request(AxumExtractRequest::from_parts(parts, body), &()).await?;
            request.body =
                (!bytes.is_empty()).then(|| String::from_utf8_lossy(&bytes).into_owned());
        }

        Ok(request)
    }
}

impl IntoResponse for AxumAdapterError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AxumAdapterError::UnsupportedMethod {
                route: Route::NotFound,
                ..
            } => StatusCode::NOT_FOUND.into_response(),
            AxumAdapterError::UnsupportedMethod { .. } => {
                StatusCode::METHOD_NOT_ALLOWED.into_response()
            }
            AxumAdapterError::Body(rejection) => rejection.into_response(),
        }
    }
}

/// Newtype wrapper that turns a core response into an Axum response.
#[derive(Debug)]
pub struct AxumResponse(pub Response);

impl IntoResponse for AxumResponse {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.has_body() {
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                self.0.body,
            )
                .into_response()
        } else {
            status.into_response()
        }
    }
}
