//! PDDIKTI REST API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request           ┌───────────────────────────────────────────────┐
//!     ─────────────────────────┼─▶ request id ─▶ trace ─▶ cors ─▶ timeout      │
//!                              │                                   │           │
//!                              │                                   ▼           │
//!                              │                            ┌────────────┐     │
//!                              │                            │  handlers  │     │
//!                              │                            └─────┬──────┘     │
//!                              │                                  │            │
//!                              │                                  ▼            │
//!                              │   ┌───────────┐           ┌────────────┐      │
//!     Client Response          │   │ normalize │◀──────────│  upstream  │◀─────┼──── PDDIKTI
//!     ◀────────────────────────┼───│ + envelope│           │   client   │      │     API
//!                              │   └───────────┘           └────────────┘      │
//!                              └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use pddikti_api::config::{load_config, validate_config, ApiConfig, LogFormat};
use pddikti_api::lifecycle::startup;
use pddikti_api::observability::logging::init_logging;

/// Command line arguments. Flags override values from the config file.
#[derive(Parser, Debug)]
#[command(name = "pddikti-api")]
#[command(author, version, about = "REST API wrapper for PDDIKTI")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "PDDIKTI_API_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:5000
    #[arg(short, long, env = "PDDIKTI_API_BIND")]
    bind: Option<String>,

    /// Base URL of the upstream PDDIKTI API
    #[arg(long, env = "PDDIKTI_UPSTREAM_URL")]
    upstream_url: Option<String>,

    /// Log output format
    #[arg(long, env = "PDDIKTI_LOG_FORMAT", value_enum)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn apply(&self, config: &mut ApiConfig) {
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(url) = &self.upstream_url {
            config.upstream.base_url = url.clone();
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ApiConfig::default(),
    };
    cli.apply(&mut config);

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            eprintln!("invalid configuration: {}", error);
        }
        return Err(format!("{} configuration error(s)", errors.len()).into());
    }

    init_logging(&config.observability);

    tracing::info!("pddikti-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
