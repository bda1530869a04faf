//! Invoice routes: listing, upload, review.

use analysis_core::{Invoice, InvoiceDocument, Property, Vendor};
use askama::Template;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use chrono::Utc;
use invoice_store::InvoicePatch;
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::intake::{build_invoice, UploadFields};
use crate::state::AppState;
use crate::views::{InvoiceDetail, InvoiceRow};

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Invoice list page template.
#[derive(Template)]
#[template(path = "invoices.html")]
pub struct InvoicesTemplate {
    pub rows: Vec<InvoiceRow>,
    pub vendors: Vec<Vendor>,
    pub properties: Vec<Property>,
    pub default_vendor_id: String,
    pub default_property_id: String,
    pub ai_enabled: bool,
}

/// Invoice detail page template.
#[derive(Template)]
#[template(path = "invoice_detail.html")]
pub struct InvoiceDetailTemplate {
    pub invoice: InvoiceDetail,
}

/// Render the invoice list with the upload form.
pub async fn invoices_page(State(state): State<AppState>) -> InvoicesTemplate {
    let snapshot = state.store.snapshot().await;

    InvoicesTemplate {
        rows: InvoiceRow::all(&snapshot),
        vendors: snapshot.vendors,
        properties: snapshot.properties,
        default_vendor_id: state.defaults.vendor_id.clone(),
        default_property_id: state.defaults.property_id.clone(),
        ai_enabled: state.ai_enabled(),
    }
}

/// Render one invoice with its line items and analysis.
pub async fn invoice_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<InvoiceDetailTemplate> {
    let invoice = state.store.get_invoice(&id).await?;
    let snapshot = state.store.snapshot().await;

    Ok(InvoiceDetailTemplate {
        invoice: InvoiceDetail::new(&invoice, &snapshot),
    })
}

/// List all invoices, newest first.
pub async fn list_api(State(state): State<AppState>) -> Json<Vec<Invoice>> {
    Json(state.store.list_invoices().await)
}

/// Get one invoice.
pub async fn get_api(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>> {
    Ok(Json(state.store.get_invoice(&id).await?))
}

/// Merge a partial update into an invoice.
pub async fn patch_api(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<InvoicePatch>, JsonRejection>,
) -> Result<Json<Invoice>> {
    let Json(patch) = payload.map_err(|rejection| {
        debug!(invoice_id = %id, error = %rejection, "Rejected invoice update");
        AppError::BadRequest("Invalid request".to_string())
    })?;

    let invoice = state.store.update_invoice(&id, patch).await?;
    info!(invoice_id = %id, status = %invoice.status, "Invoice updated");

    Ok(Json(invoice))
}

/// Analyze an uploaded invoice and store the result.
///
/// Multipart fields: `file` (required), `vendorId`, `propertyId`.
pub async fn upload_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Invoice>> {
    let (document, fields) = read_upload(multipart).await?;
    let document =
        document.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    info!(
        file_name = document.file_name.as_deref().unwrap_or("-"),
        mime_type = document.mime_type(),
        bytes = document.len(),
        "Analyzing uploaded invoice"
    );

    let outcome = state.analyzer.analyze(&document).await?;
    if let Some(reason) = outcome.fallback_reason() {
        warn!(reason = %reason, "Using sample analysis for uploaded invoice");
    }

    let invoice = build_invoice(outcome, fields, &state.defaults, Utc::now());
    state.store.add_invoice(invoice.clone()).await?;

    info!(
        invoice_id = %invoice.id,
        invoice_number = %invoice.invoice_number,
        status = %invoice.status,
        total = invoice.total_amount,
        "Invoice created"
    );

    Ok(Json(invoice))
}

/// Pull the file and optional ids out of a multipart body.
///
/// A file part with no bytes counts as missing.
async fn read_upload(
    mut multipart: Multipart,
) -> Result<(Option<InvoiceDocument>, UploadFields)> {
    let mut document = None;
    let mut fields = UploadFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::BadRequest(err.body_text()))?;
                if bytes.is_empty() {
                    continue;
                }

                let mut doc = InvoiceDocument::new(bytes.to_vec());
                if let Some(content_type) = content_type {
                    doc = doc.with_content_type(content_type);
                }
                if let Some(file_name) = file_name {
                    doc = doc.with_file_name(file_name);
                }
                document = Some(doc);
            }
            "vendorId" => {
                fields.vendor_id = Some(read_text(field).await?);
            }
            "propertyId" => {
                fields.property_id = Some(read_text(field).await?);
            }
            other => {
                debug!(field = other, "Ignoring upload field");
            }
        }
    }

    Ok((document, fields))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
