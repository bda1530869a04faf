//! Report page and file downloads.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use reports::ReportKind;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Reports page template.
#[derive(Template)]
#[template(path = "reports.html")]
pub struct ReportsTemplate {
    pub reports: Vec<ReportLink>,
}

/// A downloadable report on the reports page.
pub struct ReportLink {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub format: &'static str,
}

/// Render the list of available reports.
pub async fn reports_page() -> ReportsTemplate {
    let reports = ReportKind::ALL
        .into_iter()
        .map(|kind| ReportLink {
            slug: kind.slug(),
            title: kind.title(),
            description: kind.description(),
            format: kind.format_label(),
        })
        .collect();

    ReportsTemplate { reports }
}

/// Render a report from the current store contents as an attachment.
pub async fn download(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response> {
    let kind = ReportKind::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown report: {}", slug)))?;
    let snapshot = state.store.snapshot().await;

    let file = tokio::task::spawn_blocking(move || reports::render(kind, &snapshot, &Utc::now()))
        .await
        .map_err(|err| AppError::Internal(err.to_string()))??;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type().to_string()),
            (header::CONTENT_DISPOSITION, file.content_disposition()),
        ],
        file.bytes,
    )
        .into_response())
}
