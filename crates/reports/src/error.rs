//! Report error types.

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// PDF layout or serialization failed
    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),

    /// Workbook construction failed
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Csv(err.to_string())
    }
}

/// Result type for report rendering.
pub type Result<T> = std::result::Result<T, ReportError>;
