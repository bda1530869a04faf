//! Analysis results and the tagged outcome returned by the requester.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{InvoiceAnalysis, LineItem};

/// Line items and assessment produced for one invoice document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub line_items: Vec<LineItem>,
    pub analysis: InvoiceAnalysis,
}

impl AnalysisResult {
    /// Sum of all line item totals.
    pub fn line_item_total(&self) -> f64 {
        self.line_items.iter().map(|item| item.total).sum()
    }
}

/// Where an invoice's analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Extracted from the uploaded document by the analysis service.
    Ai,
    /// Placeholder data that does not describe the uploaded document.
    Fallback,
}

impl AnalysisSource {
    /// Wire name of the source.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Ai => "ai",
            AnalysisSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the fallback analyzer was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No primary analyzer is configured.
    NotConfigured,
    /// The primary analyzer failed with the given error message.
    PrimaryFailed(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NotConfigured => f.write_str("no analysis service configured"),
            FallbackReason::PrimaryFailed(err) => write!(f, "analysis service failed: {}", err),
        }
    }
}

/// Result of an analysis request, tagged with how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The primary analyzer extracted the result from the document.
    Extracted(AnalysisResult),
    /// The fallback analyzer produced the result.
    FellBack {
        reason: FallbackReason,
        result: AnalysisResult,
    },
}

impl AnalysisOutcome {
    /// The analysis result, regardless of source.
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Extracted(result) => result,
            AnalysisOutcome::FellBack { result, .. } => result,
        }
    }

    /// Consume the outcome and return the analysis result.
    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Extracted(result) => result,
            AnalysisOutcome::FellBack { result, .. } => result,
        }
    }

    /// Where the result came from.
    pub fn source(&self) -> AnalysisSource {
        match self {
            AnalysisOutcome::Extracted(_) => AnalysisSource::Ai,
            AnalysisOutcome::FellBack { .. } => AnalysisSource::Fallback,
        }
    }

    /// Fallback reason, if the fallback analyzer was used.
    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            AnalysisOutcome::Extracted(_) => None,
            AnalysisOutcome::FellBack { reason, .. } => Some(reason),
        }
    }

    /// Check if the fallback analyzer produced this outcome.
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::FellBack { .. })
    }
}
