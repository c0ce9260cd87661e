use axum::extract::State;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::handlers::SearchParams;
use crate::http::request::ApiQuery;
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::normalize::{is_present, Keyword};
use crate::upstream::SearchScope;

/// Search across universities, students, lecturers and programs at once.
///
/// The upstream groups results per category; that grouping is passed
/// through untouched.
pub async fn search_all(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<ApiResponse<Value>, ApiError> {
    let keyword = Keyword::parse(params.q.as_deref())?;
    let result = state.client.search(SearchScope::All, &keyword).await?;

    match result {
        Some(value) if is_present(&value) => Ok(ApiResponse::new(
            value,
            format!("Search completed for '{}'", keyword),
        )),
        _ => Ok(ApiResponse::new(
            Value::Array(Vec::new()),
            format!("No results found for '{}'", keyword),
        )),
    }
}
