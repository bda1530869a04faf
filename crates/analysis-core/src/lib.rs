//! Core trait and types for invoice analysis.
//!
//! This crate provides the shared interface used by every part of the
//! invoice review dashboard. It defines:
//!
//! - [`Invoice`], [`LineItem`], [`InvoiceAnalysis`], [`Vendor`], [`Property`] - the data model
//! - [`Analyzer`] - The trait that all analyzer implementations must implement
//! - [`InvoiceDocument`] - An uploaded invoice file handed to an analyzer
//! - [`AnalysisOutcome`] - Tagged result telling real extraction apart from fallback data
//! - [`AnalysisRequester`] - Composes a primary analyzer with a fallback
//! - [`AnalysisError`] - Error types for analysis operations
//!
//! # Example
//!
//! ```rust
//! use analysis_core::{
//!     async_trait, AnalysisError, AnalysisResult, Analyzer, InvoiceAnalysis, InvoiceDocument,
//!     RecommendedAction,
//! };
//!
//! struct ApproveEverything;
//!
//! #[async_trait]
//! impl Analyzer for ApproveEverything {
//!     async fn analyze(&self, _document: &InvoiceDocument) -> Result<AnalysisResult, AnalysisError> {
//!         Ok(AnalysisResult {
//!             line_items: Vec::new(),
//!             analysis: InvoiceAnalysis {
//!                 trust_score: 100.0,
//!                 summary: "Looks fine.".to_string(),
//!                 flags: Vec::new(),
//!                 savings_potential: 0.0,
//!                 recommended_action: RecommendedAction::Approve,
//!             },
//!         })
//!     }
//!
//!     fn name(&self) -> &str {
//!         "ApproveEverything"
//!     }
//! }
//! ```

mod document;
mod error;
mod model;
mod outcome;
mod requester;
mod trait_def;

pub use document::{InvoiceDocument, DEFAULT_MIME_TYPE};
pub use error::AnalysisError;
pub use model::{
    Invoice, InvoiceAnalysis, InvoiceStatus, LineItem, Property, RecommendedAction, Trade, Vendor,
};
pub use outcome::{AnalysisOutcome, AnalysisResult, AnalysisSource, FallbackReason};
pub use requester::AnalysisRequester;
pub use trait_def::Analyzer;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
