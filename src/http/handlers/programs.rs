use axum::extract::State;

use crate::http::error::ApiError;
use crate::http::handlers::{search_in, SearchParams};
use crate::http::request::{ApiPath, ApiQuery};
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::normalize::{Listing, ProgramDetail, ResourceId};
use crate::upstream::SearchScope;

pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<ApiResponse<Listing>, ApiError> {
    search_in(&state, SearchScope::Programs, params).await
}

/// Program detail and description; 404 only when both are missing.
pub async fn detail(
    State(state): State<AppState>,
    ApiPath(program_id): ApiPath<String>,
) -> Result<ApiResponse<ProgramDetail>, ApiError> {
    let id = ResourceId::parse(&program_id)?;
    let (detail, description) = tokio::try_join!(
        state.client.program_detail(&id),
        state.client.program_description(&id),
    )?;

    ProgramDetail::from_upstream(detail, description)
        .map(|program| ApiResponse::new(program, "Program details retrieved successfully"))
        .ok_or_else(|| ApiError::NotFound("Program not found".to_string()))
}
