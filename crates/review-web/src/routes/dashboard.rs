//! Dashboard routes.

use analysis_core::Invoice;
use askama::Template;
use axum::extract::State;
use axum::Json;
use invoice_store::{aggregate, DashboardStats};
use reports::format::currency;
use serde::Serialize;

use crate::state::AppState;
use crate::views::{InvoiceRow, SpendBar};

/// Invoices listed under "Recent Invoices".
pub const RECENT_INVOICES: usize = 5;

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub total_spend: String,
    pub total_savings: String,
    pub flagged_count: usize,
    pub invoice_count: usize,
    pub recent: Vec<InvoiceRow>,
    pub property_spend: Vec<SpendBar>,
}

/// Dashboard data as JSON.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_invoices: Vec<Invoice>,
}

/// Render the dashboard page.
pub async fn dashboard_page(State(state): State<AppState>) -> DashboardTemplate {
    let snapshot = state.store.snapshot().await;
    let stats = snapshot.stats();

    let recent = snapshot
        .invoices
        .iter()
        .take(RECENT_INVOICES)
        .map(|i| InvoiceRow::new(i, &snapshot))
        .collect();
    let property_spend =
        SpendBar::from_groups(&aggregate::spend_by_property(&snapshot, &snapshot.invoices));

    DashboardTemplate {
        total_spend: currency(stats.total_spend),
        total_savings: currency(stats.total_savings),
        flagged_count: stats.flagged_count,
        invoice_count: stats.invoice_count,
        recent,
        property_spend,
    }
}

/// Get dashboard statistics and the newest invoices as JSON.
pub async fn dashboard_api(State(state): State<AppState>) -> Json<DashboardResponse> {
    let mut invoices = state.store.list_invoices().await;
    let stats = DashboardStats::compute(&invoices);
    invoices.truncate(RECENT_INVOICES);

    Json(DashboardResponse {
        stats,
        recent_invoices: invoices,
    })
}
