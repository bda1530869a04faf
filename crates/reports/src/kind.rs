//! Report catalogue and download metadata.

use std::fmt;

use chrono::{DateTime, Utc};

/// Downloadable reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    MonthlySpend,
    SavingsSummary,
    VendorPerformance,
    PropertyBreakdown,
    SavingsSummaryCsv,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::MonthlySpend,
        ReportKind::SavingsSummary,
        ReportKind::VendorPerformance,
        ReportKind::PropertyBreakdown,
        ReportKind::SavingsSummaryCsv,
    ];

    /// URL path segment under `/api/reports/`.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::MonthlySpend => "monthly-spend",
            ReportKind::SavingsSummary => "savings-summary",
            ReportKind::VendorPerformance => "vendor-performance",
            ReportKind::PropertyBreakdown => "property-breakdown",
            ReportKind::SavingsSummaryCsv => "savings-summary-csv",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::MonthlySpend => "Monthly Maintenance Spend",
            ReportKind::SavingsSummary => "Cost Savings Summary",
            ReportKind::VendorPerformance => "Vendor Performance Scorecard",
            ReportKind::PropertyBreakdown => "Property Maintenance Breakdown",
            ReportKind::SavingsSummaryCsv => "Cost Savings Export",
        }
    }

    /// One-line description for the reports page.
    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::MonthlySpend => {
                "Spend for the current month by property and vendor, with every invoice listed."
            }
            ReportKind::SavingsSummary => {
                "AI-identified savings opportunities, disputed charges and ROI."
            }
            ReportKind::VendorPerformance => {
                "Trust scores, flagged invoices and recommendations per vendor."
            }
            ReportKind::PropertyBreakdown => {
                "Spend per property and per unit, plus a detailed invoice sheet."
            }
            ReportKind::SavingsSummaryCsv => "Invoices with savings potential as CSV.",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReportKind::MonthlySpend
            | ReportKind::SavingsSummary
            | ReportKind::VendorPerformance => "application/pdf",
            ReportKind::PropertyBreakdown => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportKind::SavingsSummaryCsv => "text/csv",
        }
    }

    /// Short format label (`PDF`, `XLSX`, `CSV`).
    pub fn format_label(&self) -> &'static str {
        match self.extension() {
            "pdf" => "PDF",
            "xlsx" => "XLSX",
            _ => "CSV",
        }
    }

    fn stem(&self) -> &'static str {
        match self {
            ReportKind::MonthlySpend => "monthly-maintenance-spend",
            ReportKind::SavingsSummary | ReportKind::SavingsSummaryCsv => "cost-savings-summary",
            ReportKind::VendorPerformance => "vendor-performance-scorecard",
            ReportKind::PropertyBreakdown => "property-maintenance-breakdown",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ReportKind::MonthlySpend
            | ReportKind::SavingsSummary
            | ReportKind::VendorPerformance => "pdf",
            ReportKind::PropertyBreakdown => "xlsx",
            ReportKind::SavingsSummaryCsv => "csv",
        }
    }

    /// Attachment filename stamped with the year and month of `now`.
    pub fn filename(&self, now: &DateTime<Utc>) -> String {
        format!("{}-{}.{}", self.stem(), now.format("%Y-%m"), self.extension())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A rendered report ready to be served as an attachment.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub kind: ReportKind,
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }

    /// Value for the `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_filenames() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();

        assert_eq!(
            ReportKind::MonthlySpend.filename(&now),
            "monthly-maintenance-spend-2024-03.pdf"
        );
        assert_eq!(
            ReportKind::SavingsSummary.filename(&now),
            "cost-savings-summary-2024-03.pdf"
        );
        assert_eq!(
            ReportKind::VendorPerformance.filename(&now),
            "vendor-performance-scorecard-2024-03.pdf"
        );
        assert_eq!(
            ReportKind::PropertyBreakdown.filename(&now),
            "property-maintenance-breakdown-2024-03.xlsx"
        );
        assert_eq!(
            ReportKind::SavingsSummaryCsv.filename(&now),
            "cost-savings-summary-2024-03.csv"
        );
    }

    #[test]
    fn test_slug_round_trip() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ReportKind::from_slug("quarterly"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(ReportKind::VendorPerformance.content_type(), "application/pdf");
        assert_eq!(ReportKind::SavingsSummaryCsv.content_type(), "text/csv");
        assert_eq!(ReportKind::PropertyBreakdown.format_label(), "XLSX");
    }
}
