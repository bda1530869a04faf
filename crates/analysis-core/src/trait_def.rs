//! The Analyzer trait definition.

use async_trait::async_trait;

use crate::document::InvoiceDocument;
use crate::error::AnalysisError;
use crate::outcome::AnalysisResult;

/// A trait for turning an uploaded invoice document into line items and an
/// assessment.
///
/// Implementations range from a canned placeholder to a generative model
/// backend. This trait is object-safe and can be used with `Arc<dyn Analyzer>`.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze an uploaded invoice document.
    ///
    /// # Arguments
    ///
    /// * `document` - The uploaded invoice file.
    ///
    /// # Returns
    ///
    /// The extracted line items and analysis, or an error if the document
    /// could not be analyzed.
    async fn analyze(&self, document: &InvoiceDocument) -> Result<AnalysisResult, AnalysisError>;

    /// Get a human-readable name for this analyzer implementation.
    fn name(&self) -> &str;

    /// Check if the analyzer is ready to accept documents.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
