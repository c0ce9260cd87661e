//! PDDIKTI HTTP client.
//!
//! # Responsibilities
//! - Hold one pooled `reqwest::Client` with the headers PDDIKTI expects
//! - Build upstream URLs, encoding ids and keywords as single path segments
//! - Decode bodies leniently (JSON, plain text, or nothing)
//! - Map 404 to an absent value and other failures to `UpstreamError`

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::normalize::{Keyword, ResourceId, Semester};
use crate::observability::metrics;
use crate::upstream::endpoints::{
    NationalCount, PortfolioKind, SearchScope, UniversityFigure, VisualizationSeries,
};
use crate::upstream::error::{UpstreamError, UpstreamResult};

/// Client for the PDDIKTI API. Cheap to clone; clones share a connection pool.
#[derive(Clone, Debug)]
pub struct PddiktiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PddiktiClient {
    /// Create a client from configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| UpstreamError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ORIGIN, HeaderValue::from_str(&config.origin)?);
        headers.insert(REFERER, HeaderValue::from_str(&config.referer)?);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(UpstreamError::Client)?;

        tracing::info!(base_url = %base_url, "PDDIKTI client initialized");

        Ok(Self { http, base_url })
    }

    /// Build the upstream URL for a list of raw path segments.
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside an id can
    /// never introduce an extra path level.
    pub fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn search(&self, scope: SearchScope, keyword: &Keyword) -> UpstreamResult<Option<Value>> {
        self.fetch(scope.operation(), &["pencarian", scope.segment(), keyword.as_str()])
            .await
    }

    pub async fn university_detail(&self, id: &ResourceId) -> UpstreamResult<Option<Value>> {
        self.fetch("pt_detail", &["pt", "detail", id.as_str()]).await
    }

    pub async fn university_programs(
        &self,
        id: &ResourceId,
        semester: Semester,
    ) -> UpstreamResult<Option<Value>> {
        let semester = semester.to_string();
        self.fetch("pt_programs", &["pt", "prodi", id.as_str(), &semester])
            .await
    }

    pub async fn university_logo(&self, id: &ResourceId) -> UpstreamResult<Option<Value>> {
        self.fetch("pt_logo", &["pt", "logo", id.as_str()]).await
    }

    pub async fn university_figure(
        &self,
        id: &ResourceId,
        figure: UniversityFigure,
    ) -> UpstreamResult<Option<Value>> {
        self.fetch(figure.operation(), &["pt", figure.segment(), id.as_str()])
            .await
    }

    pub async fn student_detail(&self, id: &ResourceId) -> UpstreamResult<Option<Value>> {
        self.fetch("mhs_detail", &["detail", "mhs", id.as_str()]).await
    }

    pub async fn lecturer_profile(&self, id: &ResourceId) -> UpstreamResult<Option<Value>> {
        self.fetch("dosen_profile", &["dosen", "profile", id.as_str()]).await
    }

    pub async fn lecturer_portfolio(
        &self,
        id: &ResourceId,
        kind: PortfolioKind,
    ) -> UpstreamResult<Option<Value>> {
        self.fetch(kind.operation(), &["dosen", "portofolio", kind.segment(), id.as_str()])
            .await
    }

    pub async fn program_detail(&self, id: &ResourceId) -> UpstreamResult<Option<Value>> {
        self.fetch("prodi_detail", &["prodi", "detail", id.as_str()]).await
    }

    pub async fn program_description(&self, id: &ResourceId) -> UpstreamResult<Option<Value>> {
        self.fetch("prodi_description", &["prodi", "desc", id.as_str()]).await
    }

    pub async fn national_count(&self, count: NationalCount) -> UpstreamResult<Option<Value>> {
        self.fetch(count.operation(), &count.segments()).await
    }

    pub async fn visualization(&self, series: VisualizationSeries) -> UpstreamResult<Option<Value>> {
        self.fetch(series.segment, &["visualisasi", series.segment]).await
    }

    async fn fetch(&self, operation: &'static str, segments: &[&str]) -> UpstreamResult<Option<Value>> {
        let url = self.endpoint_url(segments);
        let start = Instant::now();

        tracing::debug!(operation, url = %url, "Upstream request");
        let result = self.send(url).await;

        match &result {
            Ok(value) => {
                tracing::debug!(operation, found = value.is_some(), elapsed = ?start.elapsed(), "Upstream response");
                metrics::record_upstream(operation, if value.is_some() { "ok" } else { "absent" }, start);
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "Upstream call failed");
                metrics::record_upstream(operation, e.outcome(), start);
            }
        }

        result
    }

    async fn send(&self, url: Url) -> UpstreamResult<Option<Value>> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(UpstreamError::from_reqwest)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(UpstreamError::from_reqwest)?;
        Ok(decode_body(&body))
    }
}

/// Decode an upstream body. Non-JSON text (the logo endpoint answers with
/// bare base64) is kept as a JSON string; blank bodies are absent.
pub fn decode_body(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base: &str) -> PddiktiClient {
        PddiktiClient::new(&UpstreamConfig {
            base_url: base.to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn ids_stay_one_segment() {
        let c = client("https://api.example.org");
        let url = c.endpoint_url(&["pt", "detail", "abc/def ghi"]);
        assert_eq!(url.as_str(), "https://api.example.org/pt/detail/abc%2Fdef%20ghi");
    }

    #[test]
    fn base_path_is_preserved() {
        let with_slash = client("http://localhost:9000/v2/");
        assert_eq!(
            with_slash.endpoint_url(&["pencarian", "pt", "ui"]).as_str(),
            "http://localhost:9000/v2/pencarian/pt/ui"
        );
        let without_slash = client("http://localhost:9000/v2");
        assert_eq!(
            without_slash.endpoint_url(&["pt", "count"]).as_str(),
            "http://localhost:9000/v2/pt/count"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        let err = PddiktiClient::new(&UpstreamConfig {
            base_url: "mailto:someone@example.org".into(),
            ..UpstreamConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidBaseUrl(_)));
    }

    #[test]
    fn bodies_decode_leniently() {
        assert_eq!(decode_body(""), None);
        assert_eq!(decode_body("  \n"), None);
        assert_eq!(decode_body(r#"{"jumlah": 5}"#), Some(json!({"jumlah": 5})));
        assert_eq!(decode_body("iVBORw0KGgo="), Some(json!("iVBORw0KGgo=")));
    }
}
