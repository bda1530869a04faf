//! Route handlers for the review dashboard.

pub mod dashboard;
pub mod directory;
pub mod downloads;
pub mod health;
pub mod invoices;
pub mod settings;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(dashboard::dashboard_page))
        .route("/invoices", get(invoices::invoices_page))
        .route("/invoices/:id", get(invoices::invoice_page))
        .route("/vendors", get(directory::vendors_page))
        .route("/properties", get(directory::properties_page))
        .route("/reports", get(downloads::reports_page))
        .route("/settings", get(settings::settings_page))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/dashboard", get(dashboard::dashboard_api))
        .route(
            "/api/invoices",
            get(invoices::list_api)
                .post(invoices::upload_api)
                .layer(DefaultBodyLimit::max(invoices::MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/invoices/:id",
            get(invoices::get_api).patch(invoices::patch_api),
        )
        .route("/api/vendors", get(directory::vendors_api))
        .route("/api/properties", get(directory::properties_api))
        .route("/api/ai-status", get(settings::ai_status_api))
        .route("/api/reports/:report", get(downloads::download))
}
