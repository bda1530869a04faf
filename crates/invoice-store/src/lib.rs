//! In-memory invoice registry for the invoice review dashboard.
//!
//! This crate provides the [`InvoiceRepository`] trait, an [`InMemoryStore`]
//! implementation seeded with demo data, partial-update merging via
//! [`InvoicePatch`], and the [`aggregate`] functions used by the dashboard
//! and reports.
//!
//! # Example
//!
//! ```no_run
//! use invoice_store::{InMemoryStore, InvoicePatch, InvoiceRepository};
//! use analysis_core::InvoiceStatus;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemoryStore::seeded();
//!
//!     let patch = InvoicePatch {
//!         status: Some(InvoiceStatus::Disputed),
//!         ..Default::default()
//!     };
//!     let invoice = store.update_invoice("inv-2", patch).await?;
//!     assert_eq!(invoice.status, InvoiceStatus::Disputed);
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod error;
pub mod memory;
pub mod patch;
pub mod repository;
pub mod seed;
pub mod snapshot;

pub use aggregate::{DashboardStats, PropertyMetrics, VendorMetrics};
pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use patch::InvoicePatch;
pub use repository::InvoiceRepository;
pub use snapshot::{StoreSnapshot, UNKNOWN_LABEL};
