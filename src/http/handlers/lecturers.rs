//! Lecturer endpoints.

use axum::extract::State;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::handlers::{found, search_in, SearchParams};
use crate::http::request::{ApiPath, ApiQuery};
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::normalize::{LecturerPortfolio, Listing, ResourceId};
use crate::upstream::{PortfolioKind, SearchScope};

pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<ApiResponse<Listing>, ApiError> {
    search_in(&state, SearchScope::Lecturers, params).await
}

pub async fn profile(
    State(state): State<AppState>,
    ApiPath(lecturer_id): ApiPath<String>,
) -> Result<ApiResponse<Value>, ApiError> {
    let id = ResourceId::parse(&lecturer_id)?;
    found(
        state.client.lecturer_profile(&id).await?,
        "Lecturer profile retrieved successfully",
        "Lecturer not found",
    )
}

/// Research, community service, publications and patents in one answer.
pub async fn research(
    State(state): State<AppState>,
    ApiPath(lecturer_id): ApiPath<String>,
) -> Result<ApiResponse<LecturerPortfolio>, ApiError> {
    let id = ResourceId::parse(&lecturer_id)?;
    let client = &state.client;

    let (research, community_service, publications, patents) = tokio::try_join!(
        client.lecturer_portfolio(&id, PortfolioKind::Research),
        client.lecturer_portfolio(&id, PortfolioKind::CommunityService),
        client.lecturer_portfolio(&id, PortfolioKind::Publications),
        client.lecturer_portfolio(&id, PortfolioKind::Patents),
    )?;

    let portfolio =
        LecturerPortfolio::from_upstream(research, community_service, publications, patents);
    Ok(ApiResponse::new(portfolio, "Lecturer research activities retrieved successfully"))
}
