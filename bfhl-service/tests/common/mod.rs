#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use bfhl_service::config::BfhlConfig;
use bfhl_service::services::providers::TextProvider;
use bfhl_service::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_EMAIL: &str = "qualifier@example.com";

/// Router with no AI provider configured.
pub fn test_app() -> Router {
    build_router(AppState::new(BfhlConfig::new(TEST_EMAIL), None))
}

pub fn test_app_with_provider(provider: impl TextProvider + 'static) -> Router {
    let provider: Arc<dyn TextProvider> = Arc::new(provider);
    build_router(AppState::new(BfhlConfig::new(TEST_EMAIL), Some(provider)))
}

/// Status and undecoded body text, for checks that must see exact digits.
pub async fn post_text(app: Router, body: impl Into<Body>) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bfhl")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let (status, text) = post_text(app, body).await;
    (status, serde_json::from_str(&text).unwrap_or(Value::Null))
}

pub async fn post_bfhl(app: Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
