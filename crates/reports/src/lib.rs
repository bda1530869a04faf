//! Downloadable reports for the invoice review dashboard.
//!
//! Every report is computed from a [`StoreSnapshot`] at request time:
//!
//! | Report | Format |
//! |--------|--------|
//! | Monthly maintenance spend | PDF |
//! | Cost savings summary | PDF |
//! | Vendor performance scorecard | PDF |
//! | Property maintenance breakdown | XLSX |
//! | Cost savings export | CSV |
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use invoice_store::{InMemoryStore, InvoiceRepository};
//! use reports::ReportKind;
//!
//! # async fn example() -> Result<(), reports::ReportError> {
//! let store = InMemoryStore::seeded();
//! let snapshot = store.snapshot().await;
//! let file = reports::render(ReportKind::SavingsSummaryCsv, &snapshot, &Utc::now())?;
//! println!("{} ({} bytes)", file.filename, file.bytes.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format;
pub mod kind;

mod breakdown;
mod export;
mod monthly;
mod pdf;
mod savings;
mod vendor;

use chrono::{DateTime, Utc};
use invoice_store::StoreSnapshot;
use tracing::info;

pub use error::{ReportError, Result};
pub use kind::{ReportFile, ReportKind};

/// Render a report. `now` picks the month for the monthly report, the
/// generation date in PDF headers and the attachment filename.
pub fn render(
    kind: ReportKind,
    snapshot: &StoreSnapshot,
    now: &DateTime<Utc>,
) -> Result<ReportFile> {
    let bytes = match kind {
        ReportKind::MonthlySpend => monthly::render(snapshot, now)?,
        ReportKind::SavingsSummary => savings::render(snapshot, now)?,
        ReportKind::VendorPerformance => vendor::render(snapshot, now)?,
        ReportKind::PropertyBreakdown => breakdown::render(snapshot)?,
        ReportKind::SavingsSummaryCsv => export::render(snapshot)?,
    };

    info!(report = %kind, bytes = bytes.len(), "Rendered report");

    Ok(ReportFile {
        kind,
        filename: kind.filename(now),
        bytes,
    })
}
