//! Turning an analysis outcome into a stored invoice.

use analysis_core::{AnalysisOutcome, Invoice};
use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::config::DemoDefaults;

/// Form fields that accompany an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFields {
    pub vendor_id: Option<String>,
    pub property_id: Option<String>,
}

/// Build a new invoice from an analysis outcome.
///
/// Totals are the sum of the extracted line items with no tax. The invoice is
/// approved only when the analysis recommends approval; anything else goes to
/// review.
pub fn build_invoice(
    outcome: AnalysisOutcome,
    fields: UploadFields,
    defaults: &DemoDefaults,
    now: DateTime<Utc>,
) -> Invoice {
    let source = outcome.source();
    let result = outcome.into_result();
    let total = result.line_item_total();
    let status = result.analysis.recommended_action.initial_status();

    Invoice {
        id: Uuid::new_v4().to_string(),
        org_id: defaults.org_id.clone(),
        vendor_id: non_blank(fields.vendor_id).unwrap_or_else(|| defaults.vendor_id.clone()),
        property_id: non_blank(fields.property_id)
            .unwrap_or_else(|| defaults.property_id.clone()),
        work_order_id: None,
        invoice_number: format!("INV-{}", rand::thread_rng().gen_range(0..10_000)),
        date: now,
        due_date: None,
        subtotal: total,
        tax: 0.0,
        total_amount: total,
        status,
        file_url: defaults.file_url.clone(),
        line_items: result.line_items,
        analysis: Some(result.analysis),
        analysis_source: Some(source),
        created_at: now,
        updated_at: now,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::{AnalysisSource, FallbackReason, InvoiceStatus, RecommendedAction};
    use mock_analyzer::CannedAnalyzer;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_fallback_upload_uses_defaults() {
        let outcome = AnalysisOutcome::FellBack {
            reason: FallbackReason::NotConfigured,
            result: CannedAnalyzer::canned_result(1_700_000_000_000),
        };
        let at = now();

        let invoice = build_invoice(
            outcome,
            UploadFields::default(),
            &DemoDefaults::default(),
            at,
        );

        assert_eq!(invoice.org_id, "org-1");
        assert_eq!(invoice.vendor_id, "vend-2");
        assert_eq!(invoice.property_id, "prop-1");
        assert_eq!(invoice.file_url, "/invoices/sample_upload.jpg");
        assert_eq!(invoice.subtotal, 735.0);
        assert_eq!(invoice.total_amount, 735.0);
        assert_eq!(invoice.tax, 0.0);
        assert_eq!(invoice.status, InvoiceStatus::Review);
        assert_eq!(invoice.analysis_source, Some(AnalysisSource::Fallback));
        assert_eq!(invoice.date, at);
        assert_eq!(invoice.created_at, at);
        assert_eq!(invoice.updated_at, at);
        assert_eq!(invoice.line_items.len(), 3);
    }

    #[test]
    fn test_invoice_number_and_id() {
        let outcome = AnalysisOutcome::Extracted(CannedAnalyzer::canned_result(1));
        let invoice = build_invoice(
            outcome,
            UploadFields::default(),
            &DemoDefaults::default(),
            now(),
        );

        let number: u32 = invoice
            .invoice_number
            .strip_prefix("INV-")
            .unwrap()
            .parse()
            .unwrap();
        assert!(number < 10_000);
        assert!(Uuid::parse_str(&invoice.id).is_ok());
    }

    #[test]
    fn test_approve_recommendation_is_approved() {
        let mut result = CannedAnalyzer::canned_result(1);
        result.analysis.recommended_action = RecommendedAction::Approve;

        let invoice = build_invoice(
            AnalysisOutcome::Extracted(result),
            UploadFields {
                vendor_id: Some("vend-1".to_string()),
                property_id: Some("prop-3".to_string()),
            },
            &DemoDefaults::default(),
            now(),
        );

        assert_eq!(invoice.status, InvoiceStatus::Approved);
        assert_eq!(invoice.vendor_id, "vend-1");
        assert_eq!(invoice.property_id, "prop-3");
        assert_eq!(invoice.analysis_source, Some(AnalysisSource::Ai));
    }

    #[test]
    fn test_dispute_recommendation_goes_to_review() {
        let mut result = CannedAnalyzer::canned_result(1);
        result.analysis.recommended_action = RecommendedAction::Dispute;

        let invoice = build_invoice(
            AnalysisOutcome::Extracted(result),
            UploadFields {
                vendor_id: Some(String::new()),
                property_id: None,
            },
            &DemoDefaults::default(),
            now(),
        );

        assert_eq!(invoice.status, InvoiceStatus::Review);
        assert_eq!(invoice.vendor_id, "vend-2");
    }

    #[test]
    fn test_empty_extraction_totals_zero() {
        let mut result = CannedAnalyzer::canned_result(1);
        result.line_items.clear();

        let invoice = build_invoice(
            AnalysisOutcome::Extracted(result),
            UploadFields::default(),
            &DemoDefaults::default(),
            now(),
        );

        assert_eq!(invoice.total_amount, 0.0);
        assert!(invoice.line_items.is_empty());
    }
}
