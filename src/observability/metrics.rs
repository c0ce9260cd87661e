//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pddikti_http_requests_total` (counter): inbound requests by method, route, status
//! - `pddikti_http_request_duration_seconds` (histogram): inbound latency
//! - `pddikti_upstream_requests_total` (counter): upstream calls by operation, outcome
//! - `pddikti_upstream_request_duration_seconds` (histogram): upstream latency
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed inbound request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    ::metrics::counter!("pddikti_http_requests_total", &labels).increment(1);

    let labels = [("method", method.to_string()), ("route", route.to_string())];
    ::metrics::histogram!("pddikti_http_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record a completed upstream call.
pub fn record_upstream(operation: &'static str, outcome: &'static str, start: Instant) {
    ::metrics::counter!(
        "pddikti_upstream_requests_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
    ::metrics::histogram!("pddikti_upstream_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

/// Middleware timing every routed request.
///
/// Uses the matched route template rather than the raw path so ids do not
/// explode label cardinality.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    record_request(&method, &route, response.status().as_u16(), start);
    response
}
