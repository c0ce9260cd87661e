//! Route handlers.
//!
//! Handlers validate input, call the upstream client, and hand the raw
//! payloads to `normalize` before wrapping them in an envelope.

pub mod info;
pub mod lecturers;
pub mod programs;
pub mod search;
pub mod statistics;
pub mod students;
pub mod universities;

use serde::Deserialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::normalize::{is_present, search_message, Keyword, Listing};
use crate::upstream::SearchScope;

/// `?q=` query string shared by every search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Keyword search within one scope, always answering with a listing.
pub(crate) async fn search_in(
    state: &AppState,
    scope: SearchScope,
    params: SearchParams,
) -> Result<ApiResponse<Listing>, ApiError> {
    let keyword = Keyword::parse(params.q.as_deref())?;
    let listing = Listing::from_upstream(state.client.search(scope, &keyword).await?);
    let message = search_message(listing.len(), scope.plural(), &keyword);
    Ok(ApiResponse::new(listing, message))
}

/// Wrap a detail lookup, turning an absent or empty payload into a 404.
pub(crate) fn found(
    value: Option<Value>,
    message: &str,
    not_found: &str,
) -> Result<ApiResponse<Value>, ApiError> {
    match value.filter(is_present) {
        Some(value) => Ok(ApiResponse::new(value, message)),
        None => Err(ApiError::NotFound(not_found.to_string())),
    }
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
