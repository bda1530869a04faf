//! Partial invoice updates.

use analysis_core::{Invoice, InvoiceStatus};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Fields a client may overwrite on an existing invoice.
///
/// Absent fields are left untouched. Line items and the analysis are produced
/// once at upload and cannot be patched; unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvoicePatch {
    pub status: Option<InvoiceStatus>,
    pub vendor_id: Option<String>,
    pub property_id: Option<String>,
    pub work_order_id: Option<String>,
    pub invoice_number: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub subtotal: Option<f64>,
    pub tax: Option<f64>,
    pub total_amount: Option<f64>,
    pub file_url: Option<String>,
}

impl InvoicePatch {
    /// A patch that only changes the status.
    pub fn status(status: InvoiceStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `invoice` and stamp `updated_at`.
    pub fn apply(self, invoice: &mut Invoice, now: DateTime<Utc>) {
        if let Some(status) = self.status {
            invoice.status = status;
        }
        if let Some(vendor_id) = self.vendor_id {
            invoice.vendor_id = vendor_id;
        }
        if let Some(property_id) = self.property_id {
            invoice.property_id = property_id;
        }
        if let Some(work_order_id) = self.work_order_id {
            invoice.work_order_id = Some(work_order_id);
        }
        if let Some(invoice_number) = self.invoice_number {
            invoice.invoice_number = invoice_number;
        }
        if let Some(date) = self.date {
            invoice.date = date;
        }
        if let Some(due_date) = self.due_date {
            invoice.due_date = Some(due_date);
        }
        if let Some(subtotal) = self.subtotal {
            invoice.subtotal = subtotal;
        }
        if let Some(tax) = self.tax {
            invoice.tax = tax;
        }
        if let Some(total_amount) = self.total_amount {
            invoice.total_amount = total_amount;
        }
        if let Some(file_url) = self.file_url {
            invoice.file_url = file_url;
        }
        invoice.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_deserialize_status_only() {
        let patch: InvoicePatch = serde_json::from_str(r#"{"status": "approved"}"#).unwrap();
        assert_eq!(patch, InvoicePatch::status(InvoiceStatus::Approved));
    }

    #[test]
    fn test_deserialize_rejects_bad_payloads() {
        assert!(serde_json::from_str::<InvoicePatch>(r#"{"status": "archived"}"#).is_err());
        assert!(serde_json::from_str::<InvoicePatch>(r#"{"lineItems": []}"#).is_err());
        assert!(serde_json::from_str::<InvoicePatch>(r#"{"totalAmount": "lots"}"#).is_err());
        assert!(serde_json::from_str::<InvoicePatch>("[1, 2]").is_err());
    }

    #[test]
    fn test_empty_patch() {
        let patch: InvoicePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut invoice = seed::invoices().remove(1);
        let before = invoice.clone();
        let now = Utc::now();

        let patch: InvoicePatch =
            serde_json::from_str(r#"{"status": "disputed", "tax": 75.5}"#).unwrap();
        patch.apply(&mut invoice, now);

        assert_eq!(invoice.status, InvoiceStatus::Disputed);
        assert_eq!(invoice.tax, 75.5);
        assert_eq!(invoice.updated_at, now);
        assert_eq!(invoice.total_amount, before.total_amount);
        assert_eq!(invoice.vendor_id, before.vendor_id);
        assert_eq!(invoice.line_items, before.line_items);
        assert_eq!(invoice.created_at, before.created_at);
    }
}
