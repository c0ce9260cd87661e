//! University endpoints.

use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::handlers::{found, search_in, SearchParams};
use crate::http::request::{ApiPath, ApiQuery};
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::normalize::{
    Listing, LogoPayload, ResourceId, Semester, UniversityStats, UniversityStatsSources,
};
use crate::upstream::{SearchScope, UniversityFigure};

#[derive(Debug, Default, Deserialize)]
pub struct ProgramsParams {
    pub semester: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<ApiResponse<Listing>, ApiError> {
    search_in(&state, SearchScope::Universities, params).await
}

pub async fn detail(
    State(state): State<AppState>,
    ApiPath(university_id): ApiPath<String>,
) -> Result<ApiResponse<Value>, ApiError> {
    let id = ResourceId::parse(&university_id)?;
    found(
        state.client.university_detail(&id).await?,
        "University details retrieved successfully",
        "University not found",
    )
}

/// Programs offered in a given semester. An empty semester answers with a
/// bare empty list.
pub async fn programs(
    State(state): State<AppState>,
    ApiPath(university_id): ApiPath<String>,
    ApiQuery(params): ApiQuery<ProgramsParams>,
) -> Result<ApiResponse<Value>, ApiError> {
    let semester = Semester::parse(params.semester.as_deref())?;
    let id = ResourceId::parse(&university_id)?;

    let listing = Listing::from_upstream(state.client.university_programs(&id, semester).await?);
    if listing.is_empty() {
        return Ok(ApiResponse::new(
            Value::Array(Vec::new()),
            format!("No programs found for semester {}", semester),
        ));
    }
    let message = format!("Found {} programs for semester {}", listing.len(), semester);
    Ok(ApiResponse::new(Value::from(listing), message))
}

pub async fn logo(
    State(state): State<AppState>,
    ApiPath(university_id): ApiPath<String>,
) -> Result<ApiResponse<LogoPayload>, ApiError> {
    let id = ResourceId::parse(&university_id)?;
    match LogoPayload::from_upstream(state.client.university_logo(&id).await?) {
        Some(logo) => Ok(ApiResponse::new(logo, "University logo retrieved successfully")),
        None => Err(ApiError::NotFound("University logo not found".to_string())),
    }
}

/// Headline figures for one university, fetched concurrently.
pub async fn stats(
    State(state): State<AppState>,
    ApiPath(university_id): ApiPath<String>,
) -> Result<ApiResponse<UniversityStats>, ApiError> {
    let id = ResourceId::parse(&university_id)?;
    let client = &state.client;

    let (students, lecturers, programs, ratio, graduation_rate, cost_range) = tokio::try_join!(
        client.university_figure(&id, UniversityFigure::StudentCount),
        client.university_figure(&id, UniversityFigure::LecturerCount),
        client.university_figure(&id, UniversityFigure::ProgramCount),
        client.university_figure(&id, UniversityFigure::Ratio),
        client.university_figure(&id, UniversityFigure::GraduationRate),
        client.university_figure(&id, UniversityFigure::CostRange),
    )?;

    let stats = UniversityStats::from(UniversityStatsSources {
        students,
        lecturers,
        programs,
        ratio,
        graduation_rate,
        cost_range,
    });
    Ok(ApiResponse::new(stats, "University statistics retrieved successfully"))
}
