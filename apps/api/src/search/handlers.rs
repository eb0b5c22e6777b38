//! Axum route handlers for the Candidate Search API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::envelope::{json_body, required_text, success, Success};
use crate::errors::AppError;
use crate::search::filters::{AppliedFilter, FilterCategory};
use crate::search::models::{FilterSuggestion, SearchResults};
use crate::state::AppState;

const SUGGESTIONS_REQUIRED: &str = "Query and filter type are required";
const FILTERS_REQUIRED: &str = "Filters array is required";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsRequest {
    pub query: Option<String>,
    pub filter_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSearchRequest {
    pub filters: Option<Vec<AppliedFilter>>,
    pub page: Option<i64>,
    pub account_number: Option<u32>,
}

/// POST /api/linkedin-filters
///
/// Typeahead suggestions for one filter category, passed through from upstream.
pub async fn handle_filter_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionsRequest>, JsonRejection>,
) -> Result<Json<Success<Vec<FilterSuggestion>>>, AppError> {
    let request = json_body(payload, SUGGESTIONS_REQUIRED)?;
    let query = required_text(request.query, SUGGESTIONS_REQUIRED)?;
    let token = required_text(request.filter_type, SUGGESTIONS_REQUIRED)?;
    let category = FilterCategory::from_token(&token)
        .ok_or_else(|| AppError::Validation(format!("Unsupported filter type: {token}")))?;

    let suggestions = state
        .candidates
        .suggestions(&query, category)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch filter suggestions", e))?;

    Ok(success(suggestions))
}

/// POST /api/linkedin-search
///
/// One page of candidates matching the applied filters.
pub async fn handle_candidate_search(
    State(state): State<AppState>,
    payload: Result<Json<CandidateSearchRequest>, JsonRejection>,
) -> Result<Json<Success<SearchResults>>, AppError> {
    let request = json_body(payload, FILTERS_REQUIRED)?;
    let filters = request
        .filters
        .ok_or_else(|| AppError::Validation(FILTERS_REQUIRED.to_string()))?;
    let page = request
        .page
        .map_or(Ok(1), u32::try_from)
        .ok()
        .filter(|p| *p >= 1)
        .ok_or_else(|| AppError::Validation("Page must be 1 or greater".to_string()))?;
    let account_number = request.account_number.unwrap_or(1);

    let results = state
        .candidates
        .search(&filters, page, account_number)
        .await
        .map_err(|e| AppError::upstream("Failed to search candidates", e))?;

    Ok(success(results))
}
