use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // A join failure means the blocking extraction task died, which
            // is our fault, not the caller's.
            AppError::Extraction(ExtractError::TaskJoin(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Extraction(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The caller-facing message. Provider-reported reasons are passed
    /// through; internals are not.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Extraction(ExtractError::TaskJoin(_)) | AppError::Internal(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
            AppError::Extraction(e) => e.to_string(),
            AppError::Llm(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {self:?}");
        } else {
            tracing::warn!("rejected request: {self}");
        }

        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}
