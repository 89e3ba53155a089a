use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_201_with_token() {
    let app = TestApp::new().await;

    let response = app
        .post_token(Some("application/json"), r#"{"name":"bboe"}"#)
        .await;

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let text = response.text().await.unwrap();
    assert!(text.ends_with('\n'));

    let body: Value = serde_json::from_str(&text).unwrap();
    let token = body["token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn should_accept_content_type_in_any_case() {
    let app = TestApp::new().await;

    let response = app.post_token(Some("Application/JSON"), "[1, 2, 3]").await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn should_return_415_for_other_content_types() {
    let app = TestApp::new().await;

    for content_type in [Some("text/plain"), Some("application/json; charset=utf-8"), None] {
        let response = app.post_token(content_type, r#"{"a":1}"#).await;

        assert_eq!(
            response.status().as_u16(),
            415,
            "content type {content_type:?}"
        );
        assert!(response.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn should_return_422_for_missing_or_malformed_body() {
    let app = TestApp::new().await;

    for body in ["", "{not json", "{\"a\":1} trailing"] {
        let response = app.post_token(Some("application/json"), body).await;

        assert_eq!(response.status().as_u16(), 422, "body {body:?}");
        assert!(response.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn should_check_content_type_before_body() {
    let app = TestApp::new().await;

    let response = app.post_token(Some("text/plain"), "").await;

    assert_eq!(response.status().as_u16(), 415);
}
