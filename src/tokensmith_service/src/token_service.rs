use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use tokensmith_application::TokenHandler;
use tokensmith_axum::{BODY_LIMIT, routes::invoke};
use tokensmith_core::{Clock, TokenEngine};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front for a [`TokenHandler`].
///
/// Every path is served by the one fallback route; the handler itself decides
/// between issuing, verifying and not-found.
pub struct TokenService {
    router: Router,
}

impl TokenService {
    /// Create a new TokenService around the provided handler
    ///
    /// # Arguments
    /// * `handler` - Handler owning the token engine and clock
    pub fn new<E, C>(handler: TokenHandler<E, C>) -> Self
    where
        E: TokenEngine + 'static,
        C: Clock + 'static,
    {
        let router = Router::new()
            .fallback(invoke::<E, C>)
            .with_state(Arc::new(handler));

        Self { router }
    }

    fn with_layers(mut self) -> Self {
        // Last layer added runs first: the request id must exist before the
        // trace span is created.
        self.router = self
            .router
            .layer(DefaultBodyLimit::max(BODY_LIMIT))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));
        self
    }

    /// Convert the TokenService into a router that can be mounted on another router
    pub fn into_router(self) -> Router {
        self.with_layers().router
    }

    /// Run the token service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Token service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use secrecy::Secret;
    use tokensmith_adapters::{JwtConfig, JwtTokenEngine};
    use tokensmith_core::{FixedClock, TokenLifetime};
    use tower::ServiceExt;

    use super::*;

    fn router() -> Router {
        let config = JwtConfig::new(
            Secret::new("NOTASECRET".to_owned()),
            TokenLifetime::default(),
        );
        TokenService::new(TokenHandler::new(
            JwtTokenEngine::new(&config),
            FixedClock(1_700_000_000),
        ))
        .into_router()
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok()),
            Some("abc-123")
        );
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().contains_key("x-request-id"));
    }

    async fn send_oversized(method: &str, uri: &str, content_type: &str) -> StatusCode {
        router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", content_type)
                    .body(Body::from(vec![b' '; BODY_LIMIT + 1]))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/token")
                    .header("content-type", "application/json")
                    .body(Body::from(vec![b' '; BODY_LIMIT + 1]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn test_earlier_checks_win_over_body_limit() {
        assert_eq!(
            send_oversized("GET", "/unknown", "application/json").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            send_oversized("GET", "/token", "application/json").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            send_oversized("POST", "/token", "text/plain").await,
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            send_oversized("GET", "/", "application/json").await,
            StatusCode::FORBIDDEN
        );
    }
}
