//! Invoice review dashboard.
//!
//! Property managers upload vendor invoices, get an AI breakdown of the line
//! items with a trust assessment, then approve or dispute them. Dashboards,
//! directories and downloadable reports are computed from the same in-memory
//! store.

pub mod config;
pub mod error;
pub mod intake;
pub mod routes;
pub mod state;
pub mod views;

use std::sync::Arc;

use analysis_core::{AnalysisError, AnalysisRequester, Analyzer};
use axum::Router;
use gemini_analyzer::GeminiAnalyzer;
use tower_http::services::ServeDir;
use tracing::info;

pub use config::{Config, ConfigError, DemoDefaults};
pub use error::AppError;
pub use state::AppState;

/// Build the full application with static assets.
pub fn app(state: AppState) -> Router {
    routes::router()
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

/// Gemini when `GEMINI_API_KEY` is set, canned analysis otherwise.
pub fn build_requester(config: &Config) -> Result<AnalysisRequester, AnalysisError> {
    let primary: Option<Arc<dyn Analyzer>> = match GeminiAnalyzer::from_env() {
        Ok(analyzer) => {
            info!(model = %analyzer.config().model, "AI analysis enabled");
            Some(Arc::new(analyzer))
        }
        Err(AnalysisError::Configuration(reason)) => {
            info!(reason = %reason, "AI analysis disabled, using sample analysis");
            None
        }
        Err(err) => return Err(err),
    };

    let fallback = Arc::new(mock_analyzer::fallback_analyzer(config.mock_delay_ms));

    Ok(AnalysisRequester::new(primary, fallback).fallback_on_error(config.fallback_on_error))
}
