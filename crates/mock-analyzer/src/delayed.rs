//! Delayed analyzer implementation - wraps another analyzer with artificial delay.

use std::time::Duration;

use analysis_core::{async_trait, AnalysisError, AnalysisResult, Analyzer, InvoiceDocument};
use tokio::time::sleep;

/// An analyzer that wraps another analyzer and adds artificial delay.
///
/// Simulates the latency of a real analysis service.
pub struct DelayedAnalyzer<A: Analyzer> {
    inner: A,
    delay: Duration,
}

impl<A: Analyzer> DelayedAnalyzer<A> {
    /// Create a new DelayedAnalyzer wrapping the given analyzer with the specified delay.
    pub fn new(inner: A, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create an analyzer with a delay in milliseconds.
    pub fn with_millis(inner: A, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl<A: Analyzer> Analyzer for DelayedAnalyzer<A> {
    async fn analyze(&self, document: &InvoiceDocument) -> Result<AnalysisResult, AnalysisError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.inner.analyze(document).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CannedAnalyzer;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_analyzer() {
        let analyzer = DelayedAnalyzer::with_millis(CannedAnalyzer::new(), 100);

        let start = Instant::now();
        let result = analyzer.analyze(&InvoiceDocument::default()).await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(result.line_items.len(), 3);
        assert!(elapsed >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_delayed_analyzer_keeps_inner_name() {
        let analyzer = DelayedAnalyzer::with_millis(CannedAnalyzer::new(), 0);
        assert_eq!(analyzer.name(), "CannedAnalyzer");
        assert!(analyzer.is_ready().await);
    }

    #[test]
    fn test_fallback_analyzer_uses_delay() {
        let analyzer = crate::fallback_analyzer(crate::DEFAULT_CANNED_DELAY_MS);
        assert_eq!(analyzer.delay(), Duration::from_millis(2500));
    }
}
