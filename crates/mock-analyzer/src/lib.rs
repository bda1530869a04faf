//! Placeholder analyzer implementations.
//!
//! This crate provides implementations of the `Analyzer` trait that do not
//! call any external service:
//! - `CannedAnalyzer` - Returns a fixed plumbing invoice breakdown
//! - `DelayedAnalyzer` - Wraps another analyzer with artificial delay
//! - `FailingAnalyzer` - Always fails, for exercising fallback paths
//!
//! For real extraction, use the `gemini-analyzer` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_analyzer::{Analyzer, CannedAnalyzer, InvoiceDocument};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_analyzer::AnalysisError> {
//!     let analyzer = CannedAnalyzer::new();
//!
//!     let result = analyzer.analyze(&InvoiceDocument::new(vec![0u8; 16])).await?;
//!     println!("Trust score: {}", result.analysis.trust_score);
//!     Ok(())
//! }
//! ```

mod canned;
mod delayed;
mod failing;

// Re-export analysis-core types for convenience
pub use analysis_core::{async_trait, AnalysisError, AnalysisResult, Analyzer, InvoiceDocument};

pub use canned::CannedAnalyzer;
pub use delayed::DelayedAnalyzer;
pub use failing::FailingAnalyzer;

/// Default simulated latency of the canned analyzer, in milliseconds.
pub const DEFAULT_CANNED_DELAY_MS: u64 = 2500;

/// Build the fallback analyzer used when no analysis service is available:
/// the canned result behind the given simulated delay.
pub fn fallback_analyzer(delay_ms: u64) -> DelayedAnalyzer<CannedAnalyzer> {
    DelayedAnalyzer::with_millis(CannedAnalyzer::new(), delay_ms)
}
