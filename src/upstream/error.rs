use thiserror::Error;

/// Failures talking to the PDDIKTI API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid upstream header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("upstream returned status {status}")]
    Status { status: u16, url: String },
}

impl UpstreamError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Request(err)
        }
    }

    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            UpstreamError::Timeout => "timeout",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Request(_) => "transport",
            UpstreamError::InvalidBaseUrl(_)
            | UpstreamError::InvalidHeader(_)
            | UpstreamError::Client(_) => "setup",
        }
    }
}

pub type UpstreamResult<T> = std::result::Result<T, UpstreamError>;
