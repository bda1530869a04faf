//! Savings summary CSV export.

use invoice_store::aggregate::{self, DashboardStats};
use invoice_store::StoreSnapshot;

use crate::error::{ReportError, Result};
use crate::format::short_date;

const HEADERS: [&str; 9] = [
    "Invoice Number",
    "Date",
    "Vendor",
    "Property",
    "Amount",
    "Savings Potential",
    "Status",
    "Flags",
    "Recommendation",
];

/// One row per invoice with savings potential, then a blank line and the
/// totals.
pub fn render(snapshot: &StoreSnapshot) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for invoice in aggregate::with_savings(&snapshot.invoices) {
        let recommendation = invoice
            .recommended_action()
            .map(|a| a.as_str())
            .unwrap_or_default();

        writer.write_record([
            invoice.invoice_number.clone(),
            short_date(&invoice.date),
            snapshot.vendor_name(&invoice.vendor_id).to_string(),
            snapshot.property_name(&invoice.property_id).to_string(),
            invoice.total_amount.to_string(),
            invoice.savings_potential().to_string(),
            invoice.status.to_string(),
            invoice.flags().join("; "),
            recommendation.to_string(),
        ])?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|err| ReportError::Csv(err.to_string()))?;

    // Summary rows have fewer columns than the header, so they bypass the
    // writer's record-length check.
    let stats = DashboardStats::compute(&snapshot.invoices);
    bytes.extend_from_slice(
        format!(
            "\nTotal Identified Savings,{}\nTotal Maintenance Spend,{}\nROI Percentage,{:.1}%\n",
            stats.total_savings,
            stats.total_spend,
            stats.roi_percent()
        )
        .as_bytes(),
    );

    Ok(bytes)
}
