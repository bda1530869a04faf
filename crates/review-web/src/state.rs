//! Application state shared across handlers.

use std::sync::Arc;

use analysis_core::AnalysisRequester;
use invoice_store::InvoiceRepository;

use crate::config::DemoDefaults;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Invoice, vendor and property records.
    pub store: Arc<dyn InvoiceRepository>,
    /// AI analysis with canned fallback.
    pub analyzer: Arc<AnalysisRequester>,
    /// Upload defaults.
    pub defaults: Arc<DemoDefaults>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        store: Arc<dyn InvoiceRepository>,
        analyzer: AnalysisRequester,
        defaults: DemoDefaults,
    ) -> Self {
        Self {
            store,
            analyzer: Arc::new(analyzer),
            defaults: Arc::new(defaults),
        }
    }

    /// Whether an AI analyzer is configured.
    pub fn ai_enabled(&self) -> bool {
        self.analyzer.has_primary()
    }
}
