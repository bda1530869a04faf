//! Vendor performance scorecard PDF.

use chrono::{DateTime, Utc};
use invoice_store::aggregate::{self, VendorMetrics};
use invoice_store::StoreSnapshot;

use crate::error::Result;
use crate::format::currency;
use crate::pdf::{PdfWriter, Weight};

pub fn render(snapshot: &StoreSnapshot, now: &DateTime<Utc>) -> Result<Vec<u8>> {
    let metrics = aggregate::vendor_metrics_by_trust(snapshot);

    let mut pdf = PdfWriter::new("Vendor Performance Scorecard")?;
    pdf.header("Vendor Performance Scorecard", None, now);
    pdf.skip(20.0);

    pdf.heading("Vendor Performance Summary", 14.0);
    for metric in &metrics {
        pdf.break_if_full();
        write_vendor(&mut pdf, metric);
    }
    pdf.skip(10.0);

    pdf.break_if_full();
    pdf.heading("Recommendations", 14.0);

    let recommended: Vec<&VendorMetrics> =
        metrics.iter().filter(|m| m.is_recommended()).collect();
    let review: Vec<&VendorMetrics> = metrics.iter().filter(|m| m.needs_review()).collect();

    if !recommended.is_empty() {
        pdf.break_if_full();
        pdf.line("Recommended Vendors:", 11.0, Weight::Bold, 7.0);
        for metric in &recommended {
            pdf.break_if_full();
            pdf.line(
                &format!(
                    "- {} - High trust score ({}/100)",
                    metric.vendor.name, metric.avg_trust_score
                ),
                10.0,
                Weight::Regular,
                7.0,
            );
        }
        pdf.skip(5.0);
    }

    if !review.is_empty() {
        pdf.break_if_full();
        pdf.line("Vendors Requiring Review:", 11.0, Weight::Bold, 7.0);
        for metric in &review {
            pdf.break_if_full();
            // A page break resets the fill color on the new layer.
            pdf.alert();
            pdf.line(
                &format!(
                    "- {} - {} flagged invoices, Trust Score: {}/100",
                    metric.vendor.name, metric.flagged_count, metric.avg_trust_score
                ),
                10.0,
                Weight::Regular,
                7.0,
            );
        }
        pdf.normal();
    }

    pdf.finish()
}

fn write_vendor(pdf: &mut PdfWriter, metric: &VendorMetrics) {
    let vendor = &metric.vendor;
    let preferred = if vendor.is_preferred {
        " (Preferred Vendor)"
    } else {
        ""
    };

    pdf.line(&vendor.name, 12.0, Weight::Bold, 7.0);
    let details = [
        format!(
            "Trade: {} | Service Area: {}",
            vendor.trade.as_str(),
            vendor.service_area
        ),
        format!("Trust Score: {}/100{}", metric.avg_trust_score, preferred),
        format!(
            "Total Invoices: {} | Total Spend: {}",
            metric.invoice_count,
            currency(metric.total_spend)
        ),
        format!(
            "Flagged Invoices: {} | Potential Savings: {}",
            metric.flagged_count,
            currency(metric.total_savings)
        ),
    ];
    for line in &details {
        pdf.line(line, 10.0, Weight::Regular, 7.0);
    }

    if metric.flagged_count > 0 {
        pdf.alert();
        pdf.line("Requires Review", 10.0, Weight::Regular, 7.0);
        pdf.normal();
    }
    pdf.skip(5.0);
}
