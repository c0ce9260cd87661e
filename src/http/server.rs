//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, metrics)
//! - Serve on a listener until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ApiConfig, CorsConfig};
use crate::http::handlers::{
    self, info, lecturers, programs, search, statistics, students, universities,
};
use crate::http::request::{make_span, UuidRequestId, X_REQUEST_ID};
use crate::http::response::error_response;
use crate::observability::metrics;
use crate::upstream::{PddiktiClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: PddiktiClient,
    pub config: Arc<ApiConfig>,
}

/// HTTP server for the API.
pub struct ApiServer {
    router: Router,
    config: Arc<ApiConfig>,
}

impl ApiServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, UpstreamError> {
        let client = PddiktiClient::new(&config.upstream)?;
        let config = Arc::new(config);

        let state = AppState {
            client,
            config: config.clone(),
        };

        let router = build_router(&config, state);
        Ok(Self { router, config })
    }

    /// The fully layered router, for serving or for driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/universities/search", get(universities::search))
        .route("/universities/{university_id}", get(universities::detail))
        .route("/universities/{university_id}/programs", get(universities::programs))
        .route("/universities/{university_id}/logo", get(universities::logo))
        .route("/universities/{university_id}/stats", get(universities::stats))
        .route("/students/search", get(students::search))
        .route("/students/{student_id}", get(students::detail))
        .route("/lecturers/search", get(lecturers::search))
        .route("/lecturers/{lecturer_id}", get(lecturers::profile))
        .route("/lecturers/{lecturer_id}/research", get(lecturers::research))
        .route("/programs/search", get(programs::search))
        .route("/programs/{program_id}", get(programs::detail))
        .route("/search", get(search::search_all))
        .route("/statistics/counts", get(statistics::counts))
        .route("/statistics/visualizations", get(statistics::visualizations))
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ApiConfig, state: AppState) -> Router {
    Router::new()
        .route("/", get(info::api_info))
        .route("/health", get(info::health))
        .nest("/api/v1", api_routes())
        .route_layer(middleware::from_fn(metrics::track_requests))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(build_cors_layer(&config.cors))
                .layer(middleware::map_response(timeout_envelope))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        )
}

/// The timeout layer answers with a bare 408; give it the error envelope.
async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return error_response(StatusCode::REQUEST_TIMEOUT, "Request timed out");
    }
    response
}

/// Build the CORS layer. `"*"` allows any origin.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, X_REQUEST_ID])
        .expose_headers([X_REQUEST_ID])
        .max_age(Duration::from_secs(3600));

    if config.allows_any() {
        cors.allow_origin(Any)
    } else {
        let allowed: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(allowed)
    }
}
