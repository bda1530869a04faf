//! Error types for analyzer operations.

use thiserror::Error;

/// Errors that can occur while analyzing an invoice.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The analyzer is missing required configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request to the analysis service could not be sent.
    #[error("network error: {0}")]
    Network(String),

    /// The analysis service answered with an error status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The analysis service answered, but not with a usable result.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The analyzer is temporarily unavailable.
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),
}
