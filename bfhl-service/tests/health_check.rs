//! Health endpoint tests, in-process and over a real socket.

mod common;

use axum::http::StatusCode;
use bfhl_service::config::BfhlConfig;
use bfhl_service::services::providers::mock::MockTextProvider;
use bfhl_service::startup::{AppState, Application};
use common::{get_json, test_app, test_app_with_provider, TEST_EMAIL};
use reqwest::Client;
use std::time::Duration;

#[tokio::test]
async fn health_check_returns_ok_without_provider() {
    let (status, body) = get_json(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_success"], true);
    assert_eq!(body["official_email"], TEST_EMAIL);
    assert!(body["timestamp"].is_string());
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn health_check_ignores_failing_provider() {
    let app = test_app_with_provider(MockTextProvider::failing());
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_success"], true);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get_json(test_app(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    let mut config = BfhlConfig::new(TEST_EMAIL);
    config.common.port = 0;

    let app = Application::build(AppState::new(config, None))
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn served_health_check_carries_request_id() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .header("x-request-id", "req-42")
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.headers()["x-request-id"], "req-42");
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["official_email"], TEST_EMAIL);
}
