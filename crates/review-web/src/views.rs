//! Display rows for the HTML templates.
//!
//! Templates only print strings and booleans; all formatting happens here.

use analysis_core::{AnalysisSource, Invoice, LineItem};
use indexmap::IndexMap;
use invoice_store::{PropertyMetrics, StoreSnapshot, VendorMetrics};
use reports::format::{currency, short_date};

/// One invoice in a table.
pub struct InvoiceRow {
    pub id: String,
    pub invoice_number: String,
    pub vendor: String,
    pub property: String,
    pub date: String,
    pub amount: String,
    pub status: String,
    pub trust_score: String,
    pub savings: String,
    pub flagged: bool,
}

impl InvoiceRow {
    pub fn new(invoice: &Invoice, snapshot: &StoreSnapshot) -> Self {
        Self {
            id: invoice.id.clone(),
            invoice_number: invoice.invoice_number.clone(),
            vendor: snapshot.vendor_name(&invoice.vendor_id).to_string(),
            property: snapshot.property_name(&invoice.property_id).to_string(),
            date: short_date(&invoice.date),
            amount: currency(invoice.total_amount),
            status: invoice.status.to_string(),
            trust_score: invoice
                .analysis
                .as_ref()
                .map(|a| format!("{:.0}", a.trust_score))
                .unwrap_or_else(|| "-".to_string()),
            savings: currency(invoice.savings_potential()),
            flagged: invoice.is_flagged(),
        }
    }

    pub fn all(snapshot: &StoreSnapshot) -> Vec<Self> {
        snapshot
            .invoices
            .iter()
            .map(|i| Self::new(i, snapshot))
            .collect()
    }
}

/// One extracted line item.
pub struct LineItemRow {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub total: String,
    pub flagged: bool,
    pub flag_reason: String,
    pub baseline: String,
    pub variance: String,
}

impl From<&LineItem> for LineItemRow {
    fn from(item: &LineItem) -> Self {
        Self {
            description: item.description.clone(),
            quantity: format!("{}", item.quantity),
            unit_price: currency(item.unit_price),
            total: currency(item.total),
            flagged: item.flagged,
            flag_reason: item.flag_reason.clone().unwrap_or_default(),
            baseline: item.baseline_price.map(currency).unwrap_or_default(),
            variance: item
                .variance_percent
                .map(|v| format!("+{:.0}%", v))
                .unwrap_or_default(),
        }
    }
}

/// The analysis panel of the invoice page.
pub struct AnalysisView {
    pub trust_score: String,
    pub summary: String,
    pub flags: Vec<String>,
    pub savings: String,
    pub action: String,
    pub source: String,
}

/// Everything the invoice detail page shows.
pub struct InvoiceDetail {
    pub row: InvoiceRow,
    pub subtotal: String,
    pub tax: String,
    pub file_url: String,
    pub line_items: Vec<LineItemRow>,
    pub analysis: Option<AnalysisView>,
}

impl InvoiceDetail {
    pub fn new(invoice: &Invoice, snapshot: &StoreSnapshot) -> Self {
        let source = match invoice.analysis_source {
            Some(AnalysisSource::Ai) => "AI extraction",
            Some(AnalysisSource::Fallback) => "Sample analysis (AI unavailable)",
            None => "Imported",
        };

        Self {
            row: InvoiceRow::new(invoice, snapshot),
            subtotal: currency(invoice.subtotal),
            tax: currency(invoice.tax),
            file_url: invoice.file_url.clone(),
            line_items: invoice.line_items.iter().map(LineItemRow::from).collect(),
            analysis: invoice.analysis.as_ref().map(|a| AnalysisView {
                trust_score: format!("{:.0}", a.trust_score),
                summary: a.summary.clone(),
                flags: a.flags.clone(),
                savings: currency(a.savings_potential),
                action: a.recommended_action.to_string(),
                source: source.to_string(),
            }),
        }
    }
}

/// A labelled horizontal bar, width as a percentage of the largest value.
pub struct SpendBar {
    pub label: String,
    pub amount: String,
    pub percent: u32,
}

impl SpendBar {
    pub fn from_groups(groups: &IndexMap<String, f64>) -> Vec<Self> {
        let max = groups.values().copied().fold(0.0_f64, f64::max);
        groups
            .iter()
            .map(|(label, amount)| SpendBar {
                label: label.clone(),
                amount: currency(*amount),
                percent: if max > 0.0 {
                    (amount / max * 100.0).round() as u32
                } else {
                    0
                },
            })
            .collect()
    }
}

/// Price list entry on a vendor card.
pub struct PriceRow {
    pub item: String,
    pub price: String,
}

/// Vendors shown on the directory page.
pub struct VendorRow {
    pub name: String,
    pub trade: String,
    pub email: String,
    pub phone: String,
    pub service_area: String,
    pub trust_score: String,
    pub is_preferred: bool,
    pub invoice_count: usize,
    pub total_spend: String,
    pub flagged_rate: String,
    pub prices: Vec<PriceRow>,
    pub more_prices: usize,
}

/// Price entries listed on a vendor card before the "+N more" note.
const PRICES_SHOWN: usize = 2;

impl From<&VendorMetrics> for VendorRow {
    fn from(metric: &VendorMetrics) -> Self {
        let vendor = &metric.vendor;
        Self {
            name: vendor.name.clone(),
            trade: vendor.trade.to_string(),
            email: vendor.email.clone(),
            phone: vendor.phone.clone(),
            service_area: vendor.service_area.clone(),
            trust_score: format!("{:.0}", vendor.trust_score),
            is_preferred: vendor.is_preferred,
            invoice_count: metric.invoice_count,
            total_spend: currency(metric.total_spend),
            flagged_rate: format!("{:.0}%", metric.flagged_rate),
            prices: vendor
                .pricing
                .iter()
                .take(PRICES_SHOWN)
                .map(|(item, price)| PriceRow {
                    item: item.clone(),
                    price: currency(*price),
                })
                .collect(),
            more_prices: vendor.pricing.len().saturating_sub(PRICES_SHOWN),
        }
    }
}

/// Properties shown on the directory page.
pub struct PropertyRow {
    pub name: String,
    pub address: String,
    pub units: u32,
    pub image_url: String,
    pub invoice_count: usize,
    pub total_spend: String,
    pub per_unit: String,
}

impl From<&PropertyMetrics> for PropertyRow {
    fn from(metric: &PropertyMetrics) -> Self {
        let property = &metric.property;
        Self {
            name: property.name.clone(),
            address: property.address.clone(),
            units: property.units,
            image_url: property.image_url.clone().unwrap_or_default(),
            invoice_count: metric.invoice_count,
            total_spend: currency(metric.total_spend),
            per_unit: currency(metric.avg_per_unit),
        }
    }
}
