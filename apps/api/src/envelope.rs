//! Uniform response envelope and JSON body extraction shared by all handlers.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

/// Success body: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    pub data: T,
}

pub fn success<T: Serialize>(data: T) -> Json<Success<T>> {
    Json(Success {
        success: true,
        data,
    })
}

/// Unwraps a JSON body. A rejected body reports the endpoint's `missing`
/// message with the decoder's explanation in `details`.
pub fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    missing: &str,
) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!("Rejected request body: {rejection}");
        AppError::InvalidBody {
            message: missing.to_string(),
            details: rejection.body_text(),
        }
    })
}

/// Returns the trimmed-non-empty value or a validation error.
pub fn required_text(value: Option<String>, missing: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation(missing.to_string()))
}
