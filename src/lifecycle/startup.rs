//! Startup orchestration.
//!
//! Ordered startup: metrics exporter, upstream client and router, listener,
//! then serving. Any startup error is fatal.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ApiConfig;
use crate::http::ApiServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::spawn_signal_listener;
use crate::observability::metrics;
use crate::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to initialize upstream client: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start every subsystem and serve until a termination signal arrives.
pub async fn run(config: ApiConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let bind_address = config.listener.bind_address.clone();
    let server = ApiServer::new(config)?;

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    spawn_signal_listener(shutdown);

    server.run(listener, server_shutdown).await?;
    Ok(())
}
