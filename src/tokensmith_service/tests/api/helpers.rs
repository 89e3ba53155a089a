use secrecy::Secret;
use serde_json::Value;
use tokensmith_adapters::{JwtConfig, JwtTokenEngine, SystemClock, config::test};
use tokensmith_application::TokenHandler;
use tokensmith_core::TokenLifetime;
use tokensmith_service::TokenService;

pub const TEST_SECRET: &str = "NOTASECRET";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Spawn a service with the default 2s/5s window.
    pub async fn new() -> Self {
        Self::with_lifetime(TokenLifetime::default()).await
    }

    /// Spawn a service whose tokens use the given window.
    pub async fn with_lifetime(lifetime: TokenLifetime) -> Self {
        let config = JwtConfig::new(Secret::new(TEST_SECRET.to_owned()), lifetime);
        let handler = TokenHandler::new(JwtTokenEngine::new(&config), SystemClock);

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(TokenService::new(handler).run_standalone(listener));

        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to build http client");

        Self {
            address,
            http_client,
        }
    }

    /// A window that is open immediately and stays open for a minute.
    pub async fn with_open_window() -> Self {
        Self::with_lifetime(TokenLifetime::try_new(0, 60).unwrap()).await
    }

    pub async fn post_token(&self, content_type: Option<&str>, body: &str) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/token", &self.address))
            .body(body.to_owned());
        if let Some(content_type) = content_type {
            request = request.header("Content-Type", content_type);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_root(&self, authorization: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.get(format!("{}/", &self.address));
        if let Some(authorization) = authorization {
            request = request.header("Authorization", authorization);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn issue(&self, body: &str) -> String {
        let response = self.post_token(Some("application/json"), body).await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.expect("Failed to parse token body");
        body["token"]
            .as_str()
            .expect("token field is a string")
            .to_owned()
    }
}
