//! Vendor and property directories.

use analysis_core::{Property, Vendor};
use askama::Template;
use axum::extract::State;
use axum::Json;
use invoice_store::aggregate;

use crate::state::AppState;
use crate::views::{PropertyRow, VendorRow};

/// Vendor directory template.
#[derive(Template)]
#[template(path = "vendors.html")]
pub struct VendorsTemplate {
    pub vendors: Vec<VendorRow>,
}

/// Property directory template.
#[derive(Template)]
#[template(path = "properties.html")]
pub struct PropertiesTemplate {
    pub properties: Vec<PropertyRow>,
    pub total_units: u32,
}

/// Render vendors, highest spend first.
pub async fn vendors_page(State(state): State<AppState>) -> VendorsTemplate {
    let snapshot = state.store.snapshot().await;
    let vendors = aggregate::vendor_metrics_by_spend(&snapshot)
        .iter()
        .map(VendorRow::from)
        .collect();

    VendorsTemplate { vendors }
}

/// Render properties, highest spend first.
pub async fn properties_page(State(state): State<AppState>) -> PropertiesTemplate {
    let snapshot = state.store.snapshot().await;
    let total_units = snapshot.properties.iter().map(|p| p.units).sum();
    let properties = aggregate::property_metrics_by_spend(&snapshot)
        .iter()
        .map(PropertyRow::from)
        .collect();

    PropertiesTemplate {
        properties,
        total_units,
    }
}

/// List vendors as JSON.
pub async fn vendors_api(State(state): State<AppState>) -> Json<Vec<Vendor>> {
    Json(state.store.list_vendors().await)
}

/// List properties as JSON.
pub async fn properties_api(State(state): State<AppState>) -> Json<Vec<Property>> {
    Json(state.store.list_properties().await)
}
