//! In-memory invoice store.

use std::sync::Arc;

use analysis_core::{Invoice, Property, Vendor};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::patch::InvoicePatch;
use crate::repository::InvoiceRepository;
use crate::seed;

/// Process-lifetime invoice registry keyed by invoice id.
///
/// Cloning is cheap and every clone shares the same invoices. Vendors and
/// properties are fixed at construction. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Invoices in listing order (newest first).
    invoices: Arc<RwLock<IndexMap<String, Invoice>>>,
    vendors: Arc<Vec<Vendor>>,
    properties: Arc<Vec<Property>>,
}

impl InMemoryStore {
    /// Create a store from explicit records.
    pub fn new(invoices: Vec<Invoice>, vendors: Vec<Vendor>, properties: Vec<Property>) -> Self {
        let invoices = invoices
            .into_iter()
            .map(|invoice| (invoice.id.clone(), invoice))
            .collect();

        Self {
            invoices: Arc::new(RwLock::new(invoices)),
            vendors: Arc::new(vendors),
            properties: Arc::new(properties),
        }
    }

    /// Create a store holding the demo seed data.
    pub fn seeded() -> Self {
        let store = Self::new(seed::invoices(), seed::vendors(), seed::properties());
        info!(
            vendors = store.vendors.len(),
            properties = store.properties.len(),
            "Seeded invoice store"
        );
        store
    }

    /// Number of invoices currently stored.
    pub async fn len(&self) -> usize {
        self.invoices.read().await.len()
    }

    /// Check if the store holds no invoices.
    pub async fn is_empty(&self) -> bool {
        self.invoices.read().await.is_empty()
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
    async fn list_invoices(&self) -> Vec<Invoice> {
        self.invoices.read().await.values().cloned().collect()
    }

    async fn get_invoice(&self, id: &str) -> Result<Invoice> {
        let invoices = self.invoices.read().await;
        match invoices.get(id) {
            Some(invoice) => Ok(invoice.clone()),
            None => {
                debug!(
                    invoice_id = %id,
                    available = ?invoices.keys().collect::<Vec<_>>(),
                    "Invoice not found"
                );
                Err(StoreError::NotFound {
                    entity: "Invoice",
                    id: id.to_string(),
                })
            }
        }
    }

    async fn add_invoice(&self, invoice: Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        if invoices.contains_key(&invoice.id) {
            return Err(StoreError::AlreadyExists {
                entity: "Invoice",
                id: invoice.id,
            });
        }

        info!(invoice_id = %invoice.id, invoice_number = %invoice.invoice_number, "Adding invoice");
        invoices.shift_insert(0, invoice.id.clone(), invoice);
        Ok(())
    }

    async fn update_invoice(&self, id: &str, patch: InvoicePatch) -> Result<Invoice> {
        let mut invoices = self.invoices.write().await;
        let invoice = invoices.get_mut(id).ok_or_else(|| StoreError::NotFound {
            entity: "Invoice",
            id: id.to_string(),
        })?;

        info!(invoice_id = %id, patch = ?patch, "Updating invoice");
        patch.apply(invoice, Utc::now());
        Ok(invoice.clone())
    }

    async fn list_vendors(&self) -> Vec<Vendor> {
        self.vendors.as_ref().clone()
    }

    async fn list_properties(&self) -> Vec<Property> {
        self.properties.as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::InvoiceStatus;

    fn new_invoice(id: &str) -> Invoice {
        Invoice {
            id: id.to_string(),
            invoice_number: format!("INV-{}", id),
            ..seed::invoices().remove(0)
        }
    }

    #[tokio::test]
    async fn test_seeded_listing_order() {
        let store = InMemoryStore::seeded();
        let ids: Vec<_> = store
            .list_invoices()
            .await
            .into_iter()
            .map(|i| i.id)
            .collect();

        assert_eq!(ids, vec!["inv-1", "inv-2", "inv-3", "inv-4", "inv-5"]);
    }

    #[tokio::test]
    async fn test_add_invoice_goes_first() {
        let store = InMemoryStore::seeded();
        store.add_invoice(new_invoice("new-a")).await.unwrap();
        store.add_invoice(new_invoice("new-b")).await.unwrap();

        let invoices = store.list_invoices().await;
        assert_eq!(invoices.len(), 7);
        assert_eq!(invoices[0].id, "new-b");
        assert_eq!(invoices[1].id, "new-a");
        assert_eq!(invoices[2].id, "inv-1");
    }

    #[tokio::test]
    async fn test_add_duplicate_rejected() {
        let store = InMemoryStore::seeded();
        let result = store.add_invoice(new_invoice("inv-3")).await;

        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
        assert_eq!(store.len().await, 5);
    }

    #[tokio::test]
    async fn test_get_invoice() {
        let store = InMemoryStore::seeded();

        let invoice = store.get_invoice("inv-2").await.unwrap();
        assert_eq!(invoice.invoice_number, "BF-992");

        let missing = store.get_invoice("inv-404").await;
        assert!(matches!(missing, Err(StoreError::NotFound { entity: "Invoice", .. })));
    }

    #[tokio::test]
    async fn test_update_invoice_merges_and_stamps() {
        let store = InMemoryStore::seeded();
        let before = store.get_invoice("inv-2").await.unwrap();

        let updated = store
            .update_invoice("inv-2", InvoicePatch::status(InvoiceStatus::Approved))
            .await
            .unwrap();

        assert_eq!(updated.status, InvoiceStatus::Approved);
        assert!(updated.updated_at > before.updated_at);
        assert_eq!(updated.total_amount, before.total_amount);
        assert_eq!(store.get_invoice("inv-2").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_invoice_leaves_store_unchanged() {
        let store = InMemoryStore::seeded();
        let before = store.list_invoices().await;

        let result = store
            .update_invoice("nope", InvoicePatch::status(InvoiceStatus::Paid))
            .await;

        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert_eq!(store.list_invoices().await, before);
    }

    #[tokio::test]
    async fn test_clones_share_invoices() {
        let store = InMemoryStore::seeded();
        let handle = store.clone();

        handle.add_invoice(new_invoice("shared")).await.unwrap();
        assert!(store.get_invoice("shared").await.is_ok());
    }

    #[tokio::test]
    async fn test_isolated_instances() {
        let a = InMemoryStore::seeded();
        let b = InMemoryStore::seeded();

        a.add_invoice(new_invoice("only-a")).await.unwrap();
        assert!(b.get_invoice("only-a").await.is_err());
        assert_eq!(b.len().await, 5);
    }

    #[tokio::test]
    async fn test_vendor_and_property_lookup() {
        let store = InMemoryStore::seeded();

        assert_eq!(store.get_vendor("vend-2").await.unwrap().name, "Budget Fixers");
        assert_eq!(store.get_property("prop-3").await.unwrap().units, 120);
        assert!(matches!(
            store.get_vendor("vend-9").await,
            Err(StoreError::NotFound { entity: "Vendor", .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryStore::default();
        assert!(store.is_empty().await);
        assert!(store.list_vendors().await.is_empty());
        assert_eq!(store.snapshot().await.stats().total_spend, 0.0);
    }
}
