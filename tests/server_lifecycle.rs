//! Serving over a real socket and shutting down cleanly.

use std::time::Duration;

use httpmock::MockServer;
use pddikti_api::{ApiServer, Shutdown};
use tokio::net::TcpListener;

mod common;

#[tokio::test]
async fn serves_until_shutdown() {
    let upstream = MockServer::start_async().await;
    let server = ApiServer::new(common::config_for(&upstream)).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = http
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    shutdown.trigger();
    let outcome = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server should stop after shutdown")
        .unwrap();
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn unknown_upstream_host_is_a_bad_gateway() {
    let upstream = MockServer::start_async().await;
    let mut config = common::config_for(&upstream);
    config.upstream.base_url = "http://127.0.0.1:1".to_string();
    let app = ApiServer::new(config).unwrap().router();

    let res = common::get(&app, "/api/v1/statistics/counts").await;
    common::assert_error(&res, axum::http::StatusCode::BAD_GATEWAY, "Upstream request failed");
}
