use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use birdwatch_core::error::CoreError;
use serde_json::json;

use crate::form::FormError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for store failures and adds HTTP-specific variants.
/// Every variant maps to a 500; details are logged, never returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A store error from `birdwatch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A submitted form could not be decoded.
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Encoding the response body failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(core) => match core {
                CoreError::Storage(err) => {
                    tracing::error!(error = %err, "Store error");
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                }
            },
            AppError::Form(err) => {
                tracing::error!(error = %err, "Failed to parse form");
            }
            AppError::Serialization(err) => {
                // Nothing sensible to put in the body when encoding itself failed.
                tracing::error!(error = %err, "Failed to serialize response");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
            }
        }

        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
