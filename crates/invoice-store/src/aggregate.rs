//! Stateless aggregation over invoice lists.
//!
//! Every function here takes a slice of invoices (usually from a
//! [`StoreSnapshot`]) and never touches the store itself.

use analysis_core::{Invoice, InvoiceStatus, Property, Vendor};
use chrono::Datelike;
use indexmap::IndexMap;
use serde::Serialize;

use crate::snapshot::StoreSnapshot;

/// Headline numbers shown on the dashboard and in reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_spend: f64,
    pub total_savings: f64,
    pub flagged_count: usize,
    pub invoice_count: usize,
}

impl DashboardStats {
    pub fn compute(invoices: &[Invoice]) -> Self {
        Self {
            total_spend: total_spend(invoices),
            total_savings: total_savings(invoices),
            flagged_count: flagged_count(invoices),
            invoice_count: invoices.len(),
        }
    }

    /// Savings as a percentage of spend. Zero when nothing has been spent.
    pub fn roi_percent(&self) -> f64 {
        if self.total_spend == 0.0 {
            0.0
        } else {
            self.total_savings / self.total_spend * 100.0
        }
    }
}

/// Sum of invoice totals.
pub fn total_spend(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(|i| i.total_amount).sum()
}

/// Sum of analysis savings potential. Invoices without analysis count as 0.
pub fn total_savings(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(Invoice::savings_potential).sum()
}

/// Invoices whose analysis recommends review or dispute.
pub fn flagged_count(invoices: &[Invoice]) -> usize {
    invoices.iter().filter(|i| i.is_flagged()).count()
}

/// Invoices dated in the given calendar month (UTC).
pub fn in_month(invoices: &[Invoice], year: i32, month: u32) -> Vec<&Invoice> {
    invoices
        .iter()
        .filter(|i| i.date.year() == year && i.date.month() == month)
        .collect()
}

/// Invoices with a positive savings potential.
pub fn with_savings(invoices: &[Invoice]) -> Vec<&Invoice> {
    invoices
        .iter()
        .filter(|i| i.savings_potential() > 0.0)
        .collect()
}

/// Invoices in `disputed` status.
pub fn disputed(invoices: &[Invoice]) -> Vec<&Invoice> {
    invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Disputed)
        .collect()
}

/// Per-vendor activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorMetrics {
    pub vendor: Vendor,
    pub invoice_count: usize,
    pub total_spend: f64,
    pub flagged_count: usize,
    /// Rounded percentage of invoices flagged.
    pub flagged_rate: f64,
    /// Rounded mean analysis trust score, or the vendor's own score when it
    /// has no invoices.
    pub avg_trust_score: f64,
    pub total_savings: f64,
}

impl VendorMetrics {
    pub fn compute(vendor: &Vendor, invoices: &[Invoice]) -> Self {
        let own: Vec<Invoice> = invoices
            .iter()
            .filter(|i| i.vendor_id == vendor.id)
            .cloned()
            .collect();

        let invoice_count = own.len();
        let flagged = flagged_count(&own);
        let (flagged_rate, avg_trust_score) = if invoice_count > 0 {
            let count = invoice_count as f64;
            let trust: f64 = own.iter().map(Invoice::trust_score).sum();
            (flagged as f64 / count * 100.0, trust / count)
        } else {
            (0.0, vendor.trust_score)
        };

        Self {
            vendor: vendor.clone(),
            invoice_count,
            total_spend: total_spend(&own),
            flagged_count: flagged,
            flagged_rate: flagged_rate.round(),
            avg_trust_score: avg_trust_score.round(),
            total_savings: total_savings(&own),
        }
    }

    /// Preferred vendor with a consistently high score.
    pub fn is_recommended(&self) -> bool {
        self.vendor.is_preferred && self.avg_trust_score >= 85.0
    }

    /// Vendor with flagged invoices or a low score.
    pub fn needs_review(&self) -> bool {
        self.flagged_count > 0 || self.avg_trust_score < 70.0
    }
}

/// Metrics for every vendor, highest spend first.
pub fn vendor_metrics_by_spend(snapshot: &StoreSnapshot) -> Vec<VendorMetrics> {
    let mut metrics = vendor_metrics(snapshot);
    metrics.sort_by(|a, b| b.total_spend.total_cmp(&a.total_spend));
    metrics
}

/// Metrics for every vendor, highest trust score first.
pub fn vendor_metrics_by_trust(snapshot: &StoreSnapshot) -> Vec<VendorMetrics> {
    let mut metrics = vendor_metrics(snapshot);
    metrics.sort_by(|a, b| b.avg_trust_score.total_cmp(&a.avg_trust_score));
    metrics
}

fn vendor_metrics(snapshot: &StoreSnapshot) -> Vec<VendorMetrics> {
    snapshot
        .vendors
        .iter()
        .map(|v| VendorMetrics::compute(v, &snapshot.invoices))
        .collect()
}

/// Per-property activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetrics {
    pub property: Property,
    pub invoice_count: usize,
    pub total_spend: f64,
    /// Spend divided by unit count, 0 for a property with no units.
    pub avg_per_unit: f64,
}

impl PropertyMetrics {
    pub fn compute(property: &Property, invoices: &[Invoice]) -> Self {
        let (invoice_count, total_spend) = invoices
            .iter()
            .filter(|i| i.property_id == property.id)
            .fold((0, 0.0), |(count, spend), i| (count + 1, spend + i.total_amount));

        let avg_per_unit = if property.units > 0 {
            total_spend / f64::from(property.units)
        } else {
            0.0
        };

        Self {
            property: property.clone(),
            invoice_count,
            total_spend,
            avg_per_unit,
        }
    }
}

/// Metrics for every property in store order.
pub fn property_metrics(snapshot: &StoreSnapshot) -> Vec<PropertyMetrics> {
    snapshot
        .properties
        .iter()
        .map(|p| PropertyMetrics::compute(p, &snapshot.invoices))
        .collect()
}

/// Metrics for every property, highest spend first.
pub fn property_metrics_by_spend(snapshot: &StoreSnapshot) -> Vec<PropertyMetrics> {
    let mut metrics = property_metrics(snapshot);
    metrics.sort_by(|a, b| b.total_spend.total_cmp(&a.total_spend));
    metrics
}

/// Spend keyed by vendor name, in first-seen order.
pub fn spend_by_vendor<'a>(
    snapshot: &StoreSnapshot,
    invoices: impl IntoIterator<Item = &'a Invoice>,
) -> IndexMap<String, f64> {
    group_spend(invoices, |i| snapshot.vendor_name(&i.vendor_id))
}

/// Spend keyed by property name, in first-seen order.
pub fn spend_by_property<'a>(
    snapshot: &StoreSnapshot,
    invoices: impl IntoIterator<Item = &'a Invoice>,
) -> IndexMap<String, f64> {
    group_spend(invoices, |i| snapshot.property_name(&i.property_id))
}

fn group_spend<'a, 's>(
    invoices: impl IntoIterator<Item = &'a Invoice>,
    label: impl Fn(&Invoice) -> &'s str,
) -> IndexMap<String, f64> {
    let mut groups: IndexMap<String, f64> = IndexMap::new();
    for invoice in invoices {
        *groups.entry(label(invoice).to_string()).or_default() += invoice.total_amount;
    }
    groups
}
