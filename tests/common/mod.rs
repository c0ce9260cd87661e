//! Shared helpers for integration tests.

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use httpmock::MockServer;
use pddikti_api::{ApiConfig, ApiServer};
use serde_json::Value;
use tower::ServiceExt;

/// Configuration pointed at a mock upstream.
pub fn config_for(upstream: &MockServer) -> ApiConfig {
    let mut config = ApiConfig::default();
    config.upstream.base_url = upstream.base_url();
    config.upstream.timeout_secs = 2;
    config.upstream.connect_timeout_secs = 1;
    config.upstream.use_system_proxy = false;
    config
}

#[allow(dead_code)]
/// Fully layered router talking to a mock upstream.
pub fn app_for(upstream: &MockServer) -> Router {
    app_with(config_for(upstream))
}

/// Fully layered router for an explicit configuration.
pub fn app_with(config: ApiConfig) -> Router {
    ApiServer::new(config).expect("server should build").router()
}

/// Response pieces tests care about.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };

    TestResponse { status, headers, json }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
pub async fn request(app: &Router, method: Method, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder().method(method).uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

/// Assert the error envelope shape and message.
#[allow(dead_code)]
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status, status);
    assert_eq!(response.json["success"], Value::Bool(false));
    assert_eq!(response.json["error"], Value::String(message.to_string()));
    assert_eq!(response.json["data"], Value::Null);
}
