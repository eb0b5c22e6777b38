use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure renders as `{"error": ..., "details": ...}`; `details` is only
/// present for undecodable bodies and server-side failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The body could not be decoded; `details` names the offending field.
    #[error("Invalid request body: {message}: {details}")]
    InvalidBody { message: String, details: String },

    /// A core operation failed. `message` is the caller-facing summary,
    /// `details` the underlying error text kept for diagnostics.
    #[error("{message}: {details}")]
    Upstream { message: String, details: String },
}

impl AppError {
    /// Wraps a core failure with the endpoint's summary message, logging it at the catch point.
    pub fn upstream(message: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!("{message}: {err}");
        AppError::Upstream {
            message: message.to_string(),
            details: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::InvalidBody { message, details } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "details": details }),
            ),
            AppError::Upstream { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "details": details }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
