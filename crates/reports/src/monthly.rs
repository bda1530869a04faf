//! Monthly maintenance spend PDF.

use chrono::{DateTime, Datelike, Utc};
use invoice_store::aggregate::{self, DashboardStats};
use invoice_store::StoreSnapshot;

use crate::error::Result;
use crate::format::{currency, month_year, short_date};
use crate::pdf::{PdfWriter, Weight};

/// Executive summary over all invoices, then spend by property and vendor and
/// an invoice list for the calendar month containing `now`.
pub fn render(snapshot: &StoreSnapshot, now: &DateTime<Utc>) -> Result<Vec<u8>> {
    let stats = DashboardStats::compute(&snapshot.invoices);
    let monthly = aggregate::in_month(&snapshot.invoices, now.year(), now.month());

    let mut pdf = PdfWriter::new("Monthly Maintenance Spend Report")?;
    pdf.header(
        "Monthly Maintenance Spend Report",
        Some(&month_year(now)),
        now,
    );
    pdf.skip(20.0);

    pdf.heading("Executive Summary", 14.0);
    pdf.line(
        &format!("Total Spend: {}", currency(stats.total_spend)),
        10.0,
        Weight::Regular,
        7.0,
    );
    pdf.line(
        &format!("Identified Savings: {}", currency(stats.total_savings)),
        10.0,
        Weight::Regular,
        7.0,
    );
    pdf.line(
        &format!("Invoices Processed: {}", stats.invoice_count),
        10.0,
        Weight::Regular,
        7.0,
    );
    pdf.line(
        &format!("Flagged for Review: {}", stats.flagged_count),
        10.0,
        Weight::Regular,
        15.0,
    );

    pdf.heading("Spend by Property", 14.0);
    for (name, amount) in aggregate::spend_by_property(snapshot, monthly.iter().copied()) {
        pdf.break_if_full();
        pdf.line(
            &format!("{}: {}", name, currency(amount)),
            10.0,
            Weight::Regular,
            7.0,
        );
    }
    pdf.skip(10.0);

    pdf.break_if_full();
    pdf.heading("Spend by Vendor", 14.0);
    for (name, amount) in aggregate::spend_by_vendor(snapshot, monthly.iter().copied()) {
        pdf.break_if_full();
        pdf.line(
            &format!("{}: {}", name, currency(amount)),
            10.0,
            Weight::Regular,
            7.0,
        );
    }
    pdf.skip(10.0);

    pdf.break_if_full();
    pdf.heading("Detailed Invoice List", 14.0);
    for invoice in &monthly {
        pdf.break_if_full();
        pdf.line(
            &format!("Invoice {}", invoice.invoice_number),
            10.0,
            Weight::Bold,
            7.0,
        );
        pdf.line(
            &format!(
                "Vendor: {} | Property: {}",
                snapshot.vendor_name(&invoice.vendor_id),
                snapshot.property_name(&invoice.property_id)
            ),
            9.0,
            Weight::Regular,
            7.0,
        );
        pdf.line(
            &format!(
                "Date: {} | Amount: {} | Status: {}",
                short_date(&invoice.date),
                currency(invoice.total_amount),
                invoice.status
            ),
            9.0,
            Weight::Regular,
            7.0,
        );

        if !invoice.flags().is_empty() {
            pdf.alert();
            pdf.line(
                &format!("Flags: {}", invoice.flags().join(", ")),
                9.0,
                Weight::Regular,
                7.0,
            );
            pdf.normal();
        }
        pdf.skip(5.0);
    }

    pdf.finish()
}
