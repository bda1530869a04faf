//! Canned analyzer implementation - ignores the document and returns a fixed result.

use analysis_core::{
    async_trait, AnalysisError, AnalysisResult, Analyzer, InvoiceAnalysis, InvoiceDocument,
    LineItem, RecommendedAction,
};
use chrono::Utc;

/// An analyzer that returns the same placeholder breakdown for every document.
///
/// The result describes an after-hours plumbing repair with an inflated labor
/// rate and an uncontracted travel fee. It has nothing to do with the uploaded
/// file.
#[derive(Debug, Clone, Default)]
pub struct CannedAnalyzer;

impl CannedAnalyzer {
    /// Create a new CannedAnalyzer.
    pub fn new() -> Self {
        Self
    }

    /// Build the canned result with line item ids stamped at `millis`.
    pub fn canned_result(millis: i64) -> AnalysisResult {
        let line_items = vec![
            LineItem {
                id: format!("li-{}-1", millis),
                description: "Emergency Leak Repair - After Hours".to_string(),
                quantity: 2.0,
                unit_price: 250.0,
                total: 500.0,
                category: None,
                flagged: true,
                flag_reason: Some("Rate exceeds market baseline ($150/hr) by 66%".to_string()),
                baseline_price: Some(150.0),
                variance_percent: Some(66.0),
            },
            LineItem {
                id: format!("li-{}-2", millis),
                description: "Copper Pipe Fittings (Assorted)".to_string(),
                quantity: 1.0,
                unit_price: 85.0,
                total: 85.0,
                category: None,
                flagged: false,
                flag_reason: None,
                baseline_price: None,
                variance_percent: None,
            },
            LineItem {
                id: format!("li-{}-3", millis),
                description: "Travel Fee".to_string(),
                quantity: 1.0,
                unit_price: 150.0,
                total: 150.0,
                category: None,
                flagged: true,
                flag_reason: Some("Travel fee is not in vendor contract".to_string()),
                baseline_price: Some(0.0),
                variance_percent: Some(100.0),
            },
        ];

        let analysis = InvoiceAnalysis {
            trust_score: 65.0,
            summary: "We detected potential overbilling on labor rates and an unapproved travel fee. \
                      The labor rate of $250/hr is significantly higher than the standard $150/hr for this region."
                .to_string(),
            flags: vec![
                "Excessive Labor Rate".to_string(),
                "Uncontracted Fee".to_string(),
            ],
            savings_potential: 350.0,
            recommended_action: RecommendedAction::Review,
        };

        AnalysisResult {
            line_items,
            analysis,
        }
    }
}

#[async_trait]
impl Analyzer for CannedAnalyzer {
    async fn analyze(&self, _document: &InvoiceDocument) -> Result<AnalysisResult, AnalysisError> {
        Ok(Self::canned_result(Utc::now().timestamp_millis()))
    }

    fn name(&self) -> &str {
        "CannedAnalyzer"
    }
}
