//! Analysis requester: primary analyzer with a fallback.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::document::InvoiceDocument;
use crate::error::AnalysisError;
use crate::outcome::{AnalysisOutcome, FallbackReason};
use crate::trait_def::Analyzer;

/// Routes documents to a primary analyzer, substituting the fallback when the
/// primary is absent or fails.
///
/// The fallback never inspects the document, so its output is tagged as
/// [`AnalysisOutcome::FellBack`] and callers can tell it apart from a real
/// extraction.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use analysis_core::AnalysisRequester;
/// use mock_analyzer::CannedAnalyzer;
///
/// let requester = AnalysisRequester::new(None, Arc::new(CannedAnalyzer::new()));
/// let outcome = requester.analyze(&document).await?;
/// assert!(outcome.is_fallback());
/// ```
#[derive(Clone)]
pub struct AnalysisRequester {
    primary: Option<Arc<dyn Analyzer>>,
    fallback: Arc<dyn Analyzer>,
    fallback_on_error: bool,
}

impl AnalysisRequester {
    /// Create a requester. Primary failures fall back by default.
    pub fn new(primary: Option<Arc<dyn Analyzer>>, fallback: Arc<dyn Analyzer>) -> Self {
        Self {
            primary,
            fallback,
            fallback_on_error: true,
        }
    }

    /// Whether primary failures are replaced with fallback data.
    ///
    /// When disabled, a primary failure is returned as an error. A missing
    /// primary still uses the fallback.
    pub fn fallback_on_error(mut self, enabled: bool) -> Self {
        self.fallback_on_error = enabled;
        self
    }

    /// Check if a primary analyzer is configured.
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Check if primary failures are replaced with fallback data.
    pub fn falls_back_on_error(&self) -> bool {
        self.fallback_on_error
    }

    /// Name of the fallback analyzer.
    pub fn fallback_name(&self) -> &str {
        self.fallback.name()
    }

    /// Name of the primary analyzer, if configured.
    pub fn primary_name(&self) -> Option<&str> {
        self.primary.as_deref().map(|a| a.name())
    }

    /// Analyze a document.
    pub async fn analyze(
        &self,
        document: &InvoiceDocument,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let Some(primary) = &self.primary else {
            debug!(
                fallback = self.fallback.name(),
                "No primary analyzer configured, using fallback"
            );
            let result = self.fallback.analyze(document).await?;
            return Ok(AnalysisOutcome::FellBack {
                reason: FallbackReason::NotConfigured,
                result,
            });
        };

        match primary.analyze(document).await {
            Ok(result) => {
                info!(
                    analyzer = primary.name(),
                    line_items = result.line_items.len(),
                    "Invoice analyzed"
                );
                Ok(AnalysisOutcome::Extracted(result))
            }
            Err(err) if self.fallback_on_error => {
                warn!(
                    analyzer = primary.name(),
                    fallback = self.fallback.name(),
                    error = %err,
                    "Analysis failed, falling back"
                );
                let result = self.fallback.analyze(document).await?;
                Ok(AnalysisOutcome::FellBack {
                    reason: FallbackReason::PrimaryFailed(err.to_string()),
                    result,
                })
            }
            Err(err) => {
                warn!(analyzer = primary.name(), error = %err, "Analysis failed");
                Err(err)
            }
        }
    }
}
