//! The invoice repository trait.

use analysis_core::{Invoice, Property, Vendor};
use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::patch::InvoicePatch;
use crate::snapshot::StoreSnapshot;

/// Access to invoices, vendors and properties.
///
/// Invoices are listed newest first. Vendors and properties are read-only.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// List all invoices, newest first.
    async fn list_invoices(&self) -> Vec<Invoice>;

    /// Get an invoice by id.
    async fn get_invoice(&self, id: &str) -> Result<Invoice>;

    /// Add a new invoice ahead of the existing ones.
    async fn add_invoice(&self, invoice: Invoice) -> Result<()>;

    /// Merge a patch into an existing invoice and return the updated record.
    ///
    /// Unknown ids leave the store unchanged.
    async fn update_invoice(&self, id: &str, patch: InvoicePatch) -> Result<Invoice>;

    /// List all vendors.
    async fn list_vendors(&self) -> Vec<Vendor>;

    /// List all properties.
    async fn list_properties(&self) -> Vec<Property>;

    /// Get a vendor by id.
    async fn get_vendor(&self, id: &str) -> Result<Vendor> {
        self.list_vendors()
            .await
            .into_iter()
            .find(|v| v.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Vendor",
                id: id.to_string(),
            })
    }

    /// Get a property by id.
    async fn get_property(&self, id: &str) -> Result<Property> {
        self.list_properties()
            .await
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Property",
                id: id.to_string(),
            })
    }

    /// Copy of everything in the store, for aggregation.
    async fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            invoices: self.list_invoices().await,
            vendors: self.list_vendors().await,
            properties: self.list_properties().await,
        }
    }
}
