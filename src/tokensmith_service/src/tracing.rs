use std::time::Duration;

use axum::{body::Body, extract::Request, response::Response};
use tokensmith_axum::routes::REQUEST_ID_HEADER;
use tracing::{Level, Span};

pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::span!(
        Level::INFO,
        "[REQUEST]",
        method = tracing::field::display(request.method()),
        uri = tracing::field::display(request.uri()),
        version = tracing::field::debug(request.version()),
        request_id = tracing::field::display(request_id),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(Level::INFO, "[REQUEST START]");
}

pub fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status_code = response.status().as_u16();

    // `event!` needs a constant level, hence one arm per level.
    match response_level(status_code) {
        Level::ERROR => {
            tracing::event!(
                Level::ERROR,
                latency = ?latency,
                status = status_code,
                "[REQUEST END]"
            )
        }
        Level::WARN => {
            tracing::event!(
                Level::WARN,
                latency = ?latency,
                status = status_code,
                "[REQUEST END]"
            )
        }
        _ => {
            tracing::event!(
                Level::INFO,
                latency = ?latency,
                status = status_code,
                "[REQUEST END]"
            )
        }
    };
}

/// Rejected requests are warnings; only server failures are errors.
fn response_level(status_code: u16) -> Level {
    match status_code / 100 {
        5 => Level::ERROR,
        4 => Level::WARN,
        _ => Level::INFO,
    }
}
