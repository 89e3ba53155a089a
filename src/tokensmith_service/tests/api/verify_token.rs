use std::time::Duration;

use tokensmith_core::TokenLifetime;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_echo_data_inside_window() {
    let app = TestApp::with_open_window().await;
    let token = app.issue(r#"{"name":"bboe","roles":["admin"]}"#).await;

    let response = app.get_root(Some(&format!("Bearer {token}"))).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        "{\"name\":\"bboe\",\"roles\":[\"admin\"]}\n"
    );
}

#[tokio::test]
async fn should_return_401_before_not_before() {
    let app = TestApp::new().await;
    let token = app.issue(r#"{"name":"bboe"}"#).await;

    let response = app.get_root(Some(&format!("Bearer {token}"))).await;

    assert_eq!(response.status().as_u16(), 401);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_return_401_once_expired() {
    let app = TestApp::with_lifetime(TokenLifetime::try_new(0, 1).unwrap()).await;
    let token = app.issue(r#"{"name":"bboe"}"#).await;

    tokio::time::sleep(Duration::from_millis(2100)).await;
    let response = app.get_root(Some(&format!("Bearer {token}"))).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_403_without_authorization() {
    let app = TestApp::with_open_window().await;

    let response = app.get_root(None).await;

    assert_eq!(response.status().as_u16(), 403);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_return_403_for_malformed_authorization() {
    let app = TestApp::with_open_window().await;
    let token = app.issue(r#"{"name":"bboe"}"#).await;

    let malformed = [
        format!("bearer {token}"),
        format!("Token {token}"),
        format!("Bearer {token} extra"),
        "Bearer".to_owned(),
        token.clone(),
    ];

    for authorization in malformed {
        let response = app.get_root(Some(&authorization)).await;

        assert_eq!(response.status().as_u16(), 403, "header {authorization:?}");
    }
}

#[tokio::test]
async fn should_return_403_for_tampered_token() {
    let app = TestApp::with_open_window().await;
    let token = app.issue(r#"{"name":"bboe"}"#).await;

    let mut parts: Vec<&str> = token.split('.').collect();
    parts[2] = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    let tampered = parts.join(".");

    let response = app.get_root(Some(&format!("Bearer {tampered}"))).await;

    assert_eq!(response.status().as_u16(), 403);
}
