//! Cost savings summary PDF.

use chrono::{DateTime, Utc};
use invoice_store::aggregate::{self, DashboardStats};
use invoice_store::StoreSnapshot;

use crate::error::Result;
use crate::format::currency;
use crate::pdf::{PdfWriter, Weight, PRODUCT};

pub fn render(snapshot: &StoreSnapshot, now: &DateTime<Utc>) -> Result<Vec<u8>> {
    let stats = DashboardStats::compute(&snapshot.invoices);
    let savings = aggregate::with_savings(&snapshot.invoices);
    let disputed = aggregate::disputed(&snapshot.invoices);
    let total_disputed: f64 = disputed.iter().map(|i| i.savings_potential()).sum();

    let mut pdf = PdfWriter::new("Cost Savings Summary")?;
    pdf.header(
        "Cost Savings Summary",
        Some("AI-Identified Savings Opportunities & ROI Analysis"),
        now,
    );
    pdf.skip(20.0);

    pdf.heading("Executive Summary", 16.0);
    let summary = [
        format!("Total Identified Savings: {}", currency(stats.total_savings)),
        format!("Total Maintenance Spend: {}", currency(stats.total_spend)),
        format!("ROI: {:.1}%", stats.roi_percent()),
        format!("Flagged Invoices: {} requiring review", stats.flagged_count),
    ];
    for line in &summary {
        pdf.line(line, 10.0, Weight::Regular, 7.0);
    }
    pdf.skip(13.0);

    if !savings.is_empty() {
        pdf.heading("Identified Savings Opportunities", 14.0);
        for invoice in &savings {
            pdf.break_if_full();
            pdf.line(
                &format!("Invoice {}", invoice.invoice_number),
                10.0,
                Weight::Bold,
                7.0,
            );

            let flags = invoice.flags();
            let issues = if flags.is_empty() {
                "None".to_string()
            } else {
                flags.join(", ")
            };
            let recommendation = invoice
                .recommended_action()
                .map(|a| a.as_str())
                .unwrap_or("review")
                .to_uppercase();

            pdf.line(
                &format!(
                    "Vendor: {} | Property: {}",
                    snapshot.vendor_name(&invoice.vendor_id),
                    snapshot.property_name(&invoice.property_id)
                ),
                10.0,
                Weight::Regular,
                7.0,
            );
            pdf.line(
                &format!(
                    "Potential Savings: {}",
                    currency(invoice.savings_potential())
                ),
                10.0,
                Weight::Regular,
                7.0,
            );
            pdf.line(&format!("Issues: {}", issues), 10.0, Weight::Regular, 7.0);
            pdf.line(
                &format!("Recommendation: {}", recommendation),
                10.0,
                Weight::Regular,
                10.0,
            );
        }
    }
    pdf.skip(10.0);

    if !disputed.is_empty() {
        pdf.break_if_full();
        pdf.heading("Successfully Disputed Charges", 14.0);
        for invoice in &disputed {
            pdf.break_if_full();
            pdf.line(
                &format!("Invoice {}", invoice.invoice_number),
                10.0,
                Weight::Bold,
                7.0,
            );
            pdf.line(
                &format!("Vendor: {}", snapshot.vendor_name(&invoice.vendor_id)),
                10.0,
                Weight::Regular,
                7.0,
            );
            pdf.line(
                &format!(
                    "Disputed Amount: {}",
                    currency(invoice.savings_potential())
                ),
                10.0,
                Weight::Regular,
                10.0,
            );
        }
        pdf.break_if_full();
        pdf.line(
            &format!("Total Disputed: {}", currency(total_disputed)),
            11.0,
            Weight::Bold,
            15.0,
        );
    }

    pdf.break_if_full();
    pdf.heading(&format!("{} System ROI", PRODUCT), 14.0);
    let closing = [
        format!(
            "The {} system has identified {} in potential savings",
            PRODUCT,
            currency(stats.total_savings)
        ),
        format!("across {} flagged invoices.", stats.flagged_count),
        "By leveraging AI-powered invoice analysis, property management teams can".to_string(),
        "reduce maintenance costs and improve vendor relationships through data-driven insights."
            .to_string(),
    ];
    for line in &closing {
        pdf.break_if_full();
        pdf.line(line, 10.0, Weight::Regular, 7.0);
    }

    pdf.finish()
}
