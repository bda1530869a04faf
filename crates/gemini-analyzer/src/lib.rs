//! Google Gemini-based invoice analyzer.
//!
//! This crate provides an [`Analyzer`] implementation that sends the uploaded
//! invoice image or PDF to the Gemini `generateContent` API together with a
//! fixed auditor prompt, and turns the model's JSON reply into line items and
//! an assessment.
//!
//! # Features
//!
//! - Uses `gemini-2.5-flash-lite` by default
//! - Sends the document inline as base64, no upload step
//! - Tolerates replies wrapped in markdown code fences
//! - Configurable via environment variables or a builder
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_analyzer::{Analyzer, GeminiAnalyzer, InvoiceDocument};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = GeminiAnalyzer::from_env()?;
//!     let document = InvoiceDocument::new(std::fs::read("invoice.jpg")?);
//!     let result = analyzer.analyze(&document).await?;
//!     println!("{}", result.analysis.summary);
//!     Ok(())
//! }
//! ```

mod analyzer;
mod api_types;
mod config;
mod extract;
mod prompt;

pub use analyzer::GeminiAnalyzer;
pub use config::{GeminiConfig, GeminiConfigBuilder};
pub use extract::{extract_json, parse_analysis};
pub use prompt::AUDITOR_PROMPT;

// Re-export analysis-core types for convenience
pub use analysis_core::{async_trait, AnalysisError, AnalysisResult, Analyzer, InvoiceDocument};
