//! Configuration validation.
//!
//! Serde handles the syntactic side; this module checks value ranges and
//! formats. Validation is a pure function and reports every problem found,
//! not just the first.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

use crate::config::schema::ApiConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &ApiConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address: {}", config.listener.bind_address, e),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            if url.cannot_be_a_base() {
                errors.push(ValidationError::new("upstream.base_url", "cannot be used as a base URL"));
            }
        }
        Ok(url) => errors.push(ValidationError::new(
            "upstream.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "upstream.base_url",
            format!("'{}' is not a URL: {}", config.upstream.base_url, e),
        )),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::new("upstream.timeout_secs", "must be greater than 0"));
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::new("upstream.connect_timeout_secs", "must be greater than 0"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.cors.allowed_origins.is_empty() {
        errors.push(ValidationError::new("cors.allowed_origins", "must list at least one origin or \"*\""));
    }
    for origin in config.cors.allowed_origins.iter().filter(|o| o.as_str() != "*") {
        if HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::new(
                "cors.allowed_origins",
                format!("'{}' is not a valid origin", origin),
            ));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&ApiConfig::default()), Ok(()));
    }

    #[test]
    fn reports_every_error() {
        let mut config = ApiConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.base_url = "ftp://example.org".into();
        config.upstream.timeout_secs = 0;
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "listener.bind_address",
                "upstream.base_url",
                "upstream.timeout_secs",
                "timeouts.request_secs",
            ]
        );
    }

    #[test]
    fn metrics_address_only_checked_when_enabled() {
        let mut config = ApiConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "observability.metrics_address");
    }

    #[test]
    fn rejects_bad_cors_origin() {
        let mut config = ApiConfig::default();
        config.cors.allowed_origins = vec!["https://ok.example".into(), "bad\norigin".into()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cors.allowed_origins");
    }
}
