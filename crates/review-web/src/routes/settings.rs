//! Settings page and AI status.

use askama::Template;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Settings page template.
#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub ai_enabled: bool,
    pub analyzer: String,
    pub fallback: String,
    pub fallback_on_error: bool,
    pub org_id: String,
    pub vendor_id: String,
    pub property_id: String,
}

/// Whether an AI key is configured.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiStatus {
    pub has_key: bool,
}

/// Render the read-only settings overview.
pub async fn settings_page(State(state): State<AppState>) -> SettingsTemplate {
    let analyzer = &state.analyzer;

    SettingsTemplate {
        ai_enabled: analyzer.has_primary(),
        analyzer: analyzer.primary_name().unwrap_or("none").to_string(),
        fallback: analyzer.fallback_name().to_string(),
        fallback_on_error: analyzer.falls_back_on_error(),
        org_id: state.defaults.org_id.clone(),
        vendor_id: state.defaults.vendor_id.clone(),
        property_id: state.defaults.property_id.clone(),
    }
}

/// Report whether AI analysis is configured.
pub async fn ai_status_api(State(state): State<AppState>) -> Json<AiStatus> {
    Json(AiStatus {
        has_key: state.ai_enabled(),
    })
}
