//! Error types for the review dashboard.

use analysis_core::AnalysisError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use invoice_store::StoreError;
use reports::ReportError;
use thiserror::Error;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown record.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request.
    #[error("{0}")]
    BadRequest(String),

    /// Invoice analysis failed with no fallback.
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Report rendering failed.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, .. } => {
                AppError::NotFound(format!("{} not found", entity))
            }
            StoreError::AlreadyExists { .. } => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Analysis(err) => {
                tracing::error!("Analysis error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Report(err) => {
                tracing::error!("Report error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate report".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
