//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::envelope::{json_body, required_text, success, Success};
use crate::errors::AppError;
use crate::generation::models::{JobDescription, SearchFilterSuggestions};
use crate::state::AppState;

const PROMPT_REQUIRED: &str = "Job requirements prompt is required";
const REFINE_REQUIRED: &str = "Original job description and refinement prompt are required";
const JOB_REQUIRED: &str = "Job description is required";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub original_job: Option<JobDescription>,
    pub refinement_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFiltersRequest {
    pub job_description: Option<JobDescription>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-description
///
/// Generates a structured job description from free-text requirements.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Success<JobDescription>>, AppError> {
    let request = json_body(payload, PROMPT_REQUIRED)?;
    let prompt = required_text(request.prompt, PROMPT_REQUIRED)?;

    let job = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::upstream("Failed to generate job description", e))?;

    Ok(success(job))
}

/// POST /api/refine-description
///
/// Regenerates a full job description from an original plus a change request.
pub async fn handle_refine(
    State(state): State<AppState>,
    payload: Result<Json<RefineRequest>, JsonRejection>,
) -> Result<Json<Success<JobDescription>>, AppError> {
    let request = json_body(payload, REFINE_REQUIRED)?;
    let original = request
        .original_job
        .ok_or_else(|| AppError::Validation(REFINE_REQUIRED.to_string()))?;
    let instruction = required_text(request.refinement_prompt, REFINE_REQUIRED)?;

    let job = state
        .generator
        .refine(&original, &instruction)
        .await
        .map_err(|e| AppError::upstream("Failed to refine job description", e))?;

    Ok(success(job))
}

/// POST /api/search-filters
///
/// Suggests candidate-search filters for a job description. Never fails once
/// the body is valid; degraded suggestions are returned instead.
pub async fn handle_search_filters(
    State(state): State<AppState>,
    payload: Result<Json<SearchFiltersRequest>, JsonRejection>,
) -> Result<Json<Success<SearchFilterSuggestions>>, AppError> {
    let request = json_body(payload, JOB_REQUIRED)?;
    let job = request
        .job_description
        .ok_or_else(|| AppError::Validation(JOB_REQUIRED.to_string()))?;

    let filters = state.generator.derive_search_filters(&job).await;
    Ok(success(filters))
}
