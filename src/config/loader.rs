//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ApiConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ApiConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ApiConfig, ConfigError> {
    let config: ApiConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:8000"

            [upstream]
            base_url = "http://127.0.0.1:9999"
            timeout_secs = 5

            [cors]
            allowed_origins = ["https://campus.example"]
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:8000");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert!(!config.cors.allows_any());
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn semantic_errors_are_joined() {
        let err = parse_config(
            r#"
            [listener]
            bind_address = "nowhere"

            [timeouts]
            request_secs = 0
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("listener.bind_address"));
        assert!(message.contains("timeouts.request_secs: must be greater than 0"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
