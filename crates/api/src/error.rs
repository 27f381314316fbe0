use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use signalforge_core::error::{CoreError, GenerationError};
use signalforge_studio::StudioError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`GenerationError`] for
/// aborted generation attempts. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The image capability failed; the generation attempt was aborted.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StudioError> for AppError {
    fn from(err: StudioError) -> Self {
        match err {
            StudioError::Core(e) => AppError::Core(e),
            StudioError::Generation(e) => AppError::Generation(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // The one failure the user must see: the attempt produced no
            // image and nothing was archived.
            AppError::Generation(err) => {
                tracing::error!(error = %err, "Generation attempt failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    "Design generation failed, please try again".to_string(),
                )
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
