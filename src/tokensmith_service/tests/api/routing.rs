use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_404_for_unknown_path() {
    let app = TestApp::new().await;

    for path in ["/unknown", "/token/", "/tokens"] {
        let response = app
            .http_client
            .get(format!("{}{}", &app.address, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status().as_u16(), 404, "path {path}");
        assert!(response.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn should_return_405_for_wrong_method() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/token", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 405);

    let response = app
        .http_client
        .post(format!("{}/", &app.address))
        .header("Content-Type", "application/json")
        .body("{}")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 405);

    let response = app
        .http_client
        .delete(format!("{}/token", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn should_echo_request_id() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/missing", &app.address))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-me")
    );
}
