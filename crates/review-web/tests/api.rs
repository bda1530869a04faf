//! End-to-end tests against a running server on an ephemeral port.

use std::sync::Arc;

use analysis_core::{AnalysisRequester, Analyzer, Invoice, InvoiceStatus};
use invoice_store::{InMemoryStore, InvoiceRepository};
use mock_analyzer::{fallback_analyzer, FailingAnalyzer};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use review_web::{app, AppState, DemoDefaults};
use serde_json::Value;

struct TestServer {
    base: String,
    store: InMemoryStore,
    client: reqwest::Client,
}

impl TestServer {
    async fn start(requester: AnalysisRequester) -> Self {
        let store = InMemoryStore::seeded();
        let state = AppState::new(
            Arc::new(store.clone()),
            requester,
            DemoDefaults::default(),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });

        Self {
            base: format!("http://{}", addr),
            store,
            client: reqwest::Client::new(),
        }
    }

    async fn sample() -> Self {
        Self::start(AnalysisRequester::new(None, Arc::new(fallback_analyzer(0)))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn upload(&self, form: Form) -> reqwest::Response {
        self.client
            .post(self.url("/api/invoices"))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }
}

fn image_part() -> Part {
    Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
        .file_name("invoice.jpg")
        .mime_str("image/jpeg")
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::sample().await;
    let body: Value = server.get("/health").await.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_dashboard_stats_and_recent() {
    let server = TestServer::sample().await;
    let body: Value = server.get("/api/dashboard").await.json().await.unwrap();

    assert_eq!(body["stats"]["totalSpend"], 2075.0);
    assert_eq!(body["stats"]["totalSavings"], 800.0);
    assert_eq!(body["stats"]["flaggedCount"], 2);
    assert_eq!(body["stats"]["invoiceCount"], 5);
    assert_eq!(body["recentInvoices"].as_array().unwrap().len(), 5);
    assert_eq!(body["recentInvoices"][0]["id"], "inv-1");
}

#[tokio::test]
async fn test_list_and_get_invoices() {
    let server = TestServer::sample().await;

    let invoices: Vec<Invoice> = server.get("/api/invoices").await.json().await.unwrap();
    assert_eq!(invoices.len(), 5);

    let response = server.get("/api/invoices/inv-3").await;
    assert_eq!(response.status(), StatusCode::OK);
    let invoice: Value = response.json().await.unwrap();
    assert_eq!(invoice["invoiceNumber"], "HVAC-451");
    assert_eq!(invoice["lineItems"][0]["unitPrice"], 120.0);

    let response = server.get("/api/invoices/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invoice not found");
}

#[tokio::test]
async fn test_upload_without_ids_uses_defaults() {
    let server = TestServer::sample().await;

    let response = server.upload(Form::new().part("file", image_part())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let invoice: Invoice = response.json().await.unwrap();

    assert_eq!(invoice.vendor_id, "vend-2");
    assert_eq!(invoice.property_id, "prop-1");
    assert_eq!(invoice.org_id, "org-1");
    assert_eq!(invoice.status, InvoiceStatus::Review);
    assert_eq!(invoice.total_amount, 735.0);
    assert_eq!(invoice.tax, 0.0);
    assert!(invoice.invoice_number.starts_with("INV-"));

    // Newest first
    let listed = server.store.list_invoices().await;
    assert_eq!(listed.len(), 6);
    assert_eq!(listed[0].id, invoice.id);

    let body: Value = server
        .get(&format!("/api/invoices/{}", invoice.id))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["analysisSource"], "fallback");
}

#[tokio::test]
async fn test_upload_with_ids() {
    let server = TestServer::sample().await;

    let form = Form::new()
        .part("file", image_part())
        .text("vendorId", "vend-3")
        .text("propertyId", "prop-3");
    let invoice: Invoice = server.upload(form).await.json().await.unwrap();

    assert_eq!(invoice.vendor_id, "vend-3");
    assert_eq!(invoice.property_id, "prop-3");
}

#[tokio::test]
async fn test_upload_without_file_is_rejected() {
    let server = TestServer::sample().await;

    let response = server.upload(Form::new().text("vendorId", "vend-1")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "No file uploaded" }));

    assert_eq!(server.store.len().await, 5);
}

#[tokio::test]
async fn test_upload_fails_when_fallback_disabled() {
    let primary: Arc<dyn Analyzer> = Arc::new(FailingAnalyzer::new("quota exceeded"));
    let requester = AnalysisRequester::new(Some(primary), Arc::new(fallback_analyzer(0)))
        .fallback_on_error(false);
    let server = TestServer::start(requester).await;

    let response = server.upload(Form::new().part("file", image_part())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(server.store.len().await, 5);
}

#[tokio::test]
async fn test_upload_falls_back_when_ai_fails() {
    let primary: Arc<dyn Analyzer> = Arc::new(FailingAnalyzer::new("quota exceeded"));
    let requester = AnalysisRequester::new(Some(primary), Arc::new(fallback_analyzer(0)));
    let server = TestServer::start(requester).await;

    let response = server.upload(Form::new().part("file", image_part())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["analysisSource"], "fallback");
    assert_eq!(body["analysis"]["trustScore"], 65.0);
}

#[tokio::test]
async fn test_patch_status() {
    let server = TestServer::sample().await;

    let response = server
        .client
        .patch(server.url("/api/invoices/inv-2"))
        .json(&serde_json::json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let invoice: Invoice = response.json().await.unwrap();
    assert_eq!(invoice.status, InvoiceStatus::Approved);

    let stored = server.store.get_invoice("inv-2").await.unwrap();
    assert_eq!(stored.status, InvoiceStatus::Approved);
    assert_eq!(stored.total_amount, 900.0);
}

#[tokio::test]
async fn test_patch_unknown_invoice_is_not_found() {
    let server = TestServer::sample().await;
    let before = server.store.list_invoices().await;

    let response = server
        .client
        .patch(server.url("/api/invoices/inv-404"))
        .json(&serde_json::json!({ "status": "paid" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.store.list_invoices().await, before);
}

#[tokio::test]
async fn test_patch_malformed_payload_is_bad_request() {
    let server = TestServer::sample().await;

    for body in [
        r#"{"status": "lost"}"#,
        r#"{"lineItems": []}"#,
        "not json",
    ] {
        let response = server
            .client
            .patch(server.url("/api/invoices/inv-1"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }

    let stored = server.store.get_invoice("inv-1").await.unwrap();
    assert_eq!(stored.status, InvoiceStatus::Approved);
}

#[tokio::test]
async fn test_vendors_properties_and_ai_status() {
    let server = TestServer::sample().await;

    let vendors: Value = server.get("/api/vendors").await.json().await.unwrap();
    assert_eq!(vendors.as_array().unwrap().len(), 3);
    assert_eq!(vendors[1]["pricing"]["Patch Drywall"], 50.0);

    let properties: Value = server.get("/api/properties").await.json().await.unwrap();
    assert_eq!(properties[2]["units"], 120);

    let status: Value = server.get("/api/ai-status").await.json().await.unwrap();
    assert_eq!(status, serde_json::json!({ "hasKey": false }));
}

#[tokio::test]
async fn test_report_downloads() {
    let server = TestServer::sample().await;
    let month = chrono::Utc::now().format("%Y-%m").to_string();

    let cases = [
        ("monthly-spend", "application/pdf", "monthly-maintenance-spend", "pdf"),
        ("savings-summary", "application/pdf", "cost-savings-summary", "pdf"),
        ("vendor-performance", "application/pdf", "vendor-performance-scorecard", "pdf"),
        (
            "property-breakdown",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "property-maintenance-breakdown",
            "xlsx",
        ),
        ("savings-summary-csv", "text/csv", "cost-savings-summary", "csv"),
    ];

    for (slug, content_type, stem, extension) in cases {
        let response = server.get(&format!("/api/reports/{}", slug)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", slug);

        let headers = response.headers();
        assert_eq!(headers["content-type"], content_type);
        assert_eq!(
            headers["content-disposition"],
            format!("attachment; filename=\"{}-{}.{}\"", stem, month, extension).as_str()
        );
        assert!(!response.bytes().await.unwrap().is_empty());
    }

    let response = server.get("/api/reports/quarterly").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_html_pages_render() {
    let server = TestServer::sample().await;

    for path in [
        "/",
        "/invoices",
        "/invoices/inv-2",
        "/vendors",
        "/properties",
        "/reports",
        "/settings",
    ] {
        let response = server.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", path);
        let html = response.text().await.unwrap();
        assert!(html.contains("<html"), "{}", path);
    }

    let html = server.get("/invoices/inv-2").await.text().await.unwrap();
    assert!(html.contains("BF-992"));
    assert!(html.contains("Possible Duplicate"));

    let html = server.get("/").await.text().await.unwrap();
    assert!(html.contains("$2,075.00"));
}
