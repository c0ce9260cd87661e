//! National statistics endpoints.

use axum::extract::State;
use futures_util::future::try_join_all;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::http::request::ApiQuery;
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::normalize::NationalCounts;
use crate::upstream::{NationalCount, VisualizationCategory};

#[derive(Debug, Default, Deserialize)]
pub struct VisualizationParams {
    pub category: Option<String>,
}

pub async fn counts(State(state): State<AppState>) -> Result<ApiResponse<NationalCounts>, ApiError> {
    let client = &state.client;
    let (lecturers, students, programs, universities) = tokio::try_join!(
        client.national_count(NationalCount::ActiveLecturers),
        client.national_count(NationalCount::ActiveStudents),
        client.national_count(NationalCount::Programs),
        client.national_count(NationalCount::Universities),
    )?;

    let counts = NationalCounts::from_upstream(lecturers, students, programs, universities);
    Ok(ApiResponse::new(counts, "National statistics retrieved successfully"))
}

/// Chart data for one category; series are returned as the upstream sends them.
pub async fn visualizations(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<VisualizationParams>,
) -> Result<ApiResponse<Map<String, Value>>, ApiError> {
    let category = match params.category.as_deref() {
        None => VisualizationCategory::default(),
        Some(raw) => raw.parse::<VisualizationCategory>()?,
    };

    let series = category.series();
    let values = try_join_all(series.iter().map(|s| state.client.visualization(*s))).await?;

    let data = series
        .iter()
        .zip(values)
        .map(|(s, value)| (s.key.to_string(), value.unwrap_or(Value::Null)))
        .collect();

    Ok(ApiResponse::new(
        data,
        format!("Visualization data for {} retrieved successfully", category.as_str()),
    ))
}
