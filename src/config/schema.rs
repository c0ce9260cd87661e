//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files. Every
//! section is defaulted so an empty file (or no file at all) yields a working
//! configuration pointed at the public PDDIKTI API.

use serde::{Deserialize, Serialize};

/// Root configuration for the API service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream PDDIKTI connection settings.
    pub upstream: UpstreamConfig,

    /// Inbound request deadlines.
    pub timeouts: TimeoutConfig,

    /// Cross-origin resource sharing.
    pub cors: CorsConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Upstream data source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the PDDIKTI API.
    pub base_url: String,

    /// Total timeout for a single upstream call in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// User-Agent header sent upstream.
    pub user_agent: String,

    /// Origin header sent upstream. The API rejects requests without it.
    pub origin: String,

    /// Referer header sent upstream.
    pub referer: String,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-pddikti.kemdiktisaintek.go.id".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: concat!("pddikti-api/", env!("CARGO_PKG_VERSION")).to_string(),
            origin: "https://pddikti.kemdiktisaintek.go.id".to_string(),
            referer: "https://pddikti.kemdiktisaintek.go.id/".to_string(),
            use_system_proxy: true,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins. A single `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log line format.
    pub log_format: LogFormat,

    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Enable the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Address the Prometheus exporter listens on.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_filter: "pddikti_api=info,tower_http=info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert!(config.cors.allows_any());
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: ApiConfig = toml::from_str(
            r#"
            [upstream]
            base_url = "http://localhost:9000"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.base_url, "http://localhost:9000");
        assert_eq!(config.upstream.connect_timeout_secs, 10);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert!(!config.observability.metrics_enabled);
    }
}
