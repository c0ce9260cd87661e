use axum::extract::State;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::handlers::{found, search_in, SearchParams};
use crate::http::request::{ApiPath, ApiQuery};
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::normalize::{Listing, ResourceId};
use crate::upstream::SearchScope;

pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<ApiResponse<Listing>, ApiError> {
    search_in(&state, SearchScope::Students, params).await
}

pub async fn detail(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<String>,
) -> Result<ApiResponse<Value>, ApiError> {
    let id = ResourceId::parse(&student_id)?;
    found(
        state.client.student_detail(&id).await?,
        "Student details retrieved successfully",
        "Student not found",
    )
}
