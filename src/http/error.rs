use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::response::error_response;
use crate::normalize::ParamError;
use crate::upstream::{InvalidCategory, UpstreamError};

/// API error type that maps to error envelopes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<ParamError> for ApiError {
    fn from(err: ParamError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<InvalidCategory> for ApiError {
    fn from(err: InvalidCategory) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Upstream(UpstreamError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(UpstreamError::Status { .. } | UpstreamError::Request(_)) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the envelope's `error` field.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::MethodNotAllowed => self.to_string(),
            ApiError::Upstream(UpstreamError::Timeout) => "Upstream request timed out".to_string(),
            ApiError::Upstream(UpstreamError::Status { status, .. }) => {
                format!("Upstream returned status {}", status)
            }
            ApiError::Upstream(UpstreamError::Request(_)) => "Upstream request failed".to_string(),
            ApiError::Upstream(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Upstream(UpstreamError::Status { url, .. }) => {
                tracing::error!(status = %status, upstream_url = %url, error = %self, "Upstream error");
            }
            ApiError::Upstream(_) => {
                tracing::error!(status = %status, error = %self, "Request failed");
            }
            _ => tracing::debug!(status = %status, error = %self, "Request rejected"),
        }
        error_response(status, self.client_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::from(ParamError::MissingKeyword).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Upstream(UpstreamError::Timeout).status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            ApiError::Upstream(UpstreamError::Status { status: 503, url: "http://u/x".into() }).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Upstream(UpstreamError::InvalidBaseUrl("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn client_messages_do_not_leak_upstream_urls() {
        let err = ApiError::Upstream(UpstreamError::Status {
            status: 500,
            url: "http://internal/pt/detail/abc".into(),
        });
        assert_eq!(err.client_message(), "Upstream returned status 500");
        assert_eq!(
            ApiError::from(InvalidCategory).client_message(),
            "Invalid category. Valid options: universities, students, lecturers, programs"
        );
    }
}
