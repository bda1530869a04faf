//! Failing analyzer implementation - always returns an error.

use analysis_core::{async_trait, AnalysisError, AnalysisResult, Analyzer, InvoiceDocument};

/// An analyzer whose every call fails with [`AnalysisError::Unavailable`].
#[derive(Debug, Clone)]
pub struct FailingAnalyzer {
    message: String,
}

impl FailingAnalyzer {
    /// Create a FailingAnalyzer that reports the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingAnalyzer {
    fn default() -> Self {
        Self::new("analysis service offline")
    }
}

#[async_trait]
impl Analyzer for FailingAnalyzer {
    async fn analyze(&self, _document: &InvoiceDocument) -> Result<AnalysisResult, AnalysisError> {
        Err(AnalysisError::Unavailable(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingAnalyzer"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failing_analyzer() {
        let analyzer = FailingAnalyzer::new("boom");
        let err = analyzer
            .analyze(&InvoiceDocument::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "analyzer unavailable: boom");
        assert!(!analyzer.is_ready().await);
    }
}
