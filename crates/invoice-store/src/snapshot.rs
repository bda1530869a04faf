//! Point-in-time copy of the store with reference lookups.

use analysis_core::{Invoice, Property, Vendor};

use crate::aggregate::DashboardStats;

/// Label used when an invoice references a vendor or property that does not exist.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Everything in the store at one instant.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub invoices: Vec<Invoice>,
    pub vendors: Vec<Vendor>,
    pub properties: Vec<Property>,
}

impl StoreSnapshot {
    /// Look up a vendor by id.
    pub fn vendor(&self, id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    /// Look up a property by id.
    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Vendor name, or [`UNKNOWN_LABEL`] for a dangling reference.
    pub fn vendor_name(&self, id: &str) -> &str {
        self.vendor(id).map(|v| v.name.as_str()).unwrap_or(UNKNOWN_LABEL)
    }

    /// Property name, or [`UNKNOWN_LABEL`] for a dangling reference.
    pub fn property_name(&self, id: &str) -> &str {
        self.property(id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Dashboard statistics over all invoices.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.invoices)
    }
}
