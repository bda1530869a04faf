//! GeminiAnalyzer implementation using the Gemini REST API.

use analysis_core::{async_trait, AnalysisError, AnalysisResult, Analyzer, InvoiceDocument};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::config::GeminiConfig;
use crate::extract::parse_analysis;

/// An analyzer that sends invoice documents to Google Gemini.
///
/// One `generateContent` call per document; no retries.
pub struct GeminiAnalyzer {
    client: Client,
    config: GeminiConfig,
}

impl GeminiAnalyzer {
    /// Create a new GeminiAnalyzer with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AnalysisError> {
        if config.api_key.trim().is_empty() {
            return Err(AnalysisError::Configuration(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = Client::builder().build().map_err(|e| {
            AnalysisError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(model = %config.model, "GeminiAnalyzer initialized");

        Ok(Self { client, config })
    }

    /// Create a GeminiAnalyzer from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, AnalysisError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the request body for a document.
    fn build_request(&self, document: &InvoiceDocument) -> GenerateContentRequest {
        let parts = vec![
            Part::text(self.config.prompt.clone()),
            Part::inline(document.mime_type(), BASE64.encode(&document.bytes)),
        ];

        let generation_config =
            if self.config.temperature.is_none() && self.config.max_output_tokens.is_none() {
                None
            } else {
                Some(GenerationConfig {
                    temperature: self.config.temperature,
                    max_output_tokens: self.config.max_output_tokens,
                })
            };

        GenerateContentRequest {
            contents: vec![Content::user(parts)],
            generation_config,
        }
    }

    /// Make a `generateContent` request and return the reply text.
    async fn generate(&self, request: GenerateContentRequest) -> Result<String, AnalysisError> {
        let url = self.config.endpoint();

        debug!(url = %url, model = %self.config.model, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => api_error.error.message,
                Err(_) => error_text,
            };

            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            AnalysisError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        if let Some(usage) = &completion.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                candidate_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini token usage"
            );
        }

        completion
            .text()
            .ok_or_else(|| AnalysisError::InvalidResponse("No text in response".to_string()))
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(&self, document: &InvoiceDocument) -> Result<AnalysisResult, AnalysisError> {
        debug!(
            bytes = document.len(),
            mime_type = document.mime_type(),
            file_name = ?document.file_name,
            "Analyzing invoice document"
        );

        let request = self.build_request(document);
        let text = self.generate(request).await?;
        parse_analysis(&text, Utc::now().timestamp_millis())
    }

    fn name(&self) -> &str {
        "GeminiAnalyzer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::RecommendedAction;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn analyzer_for(api_url: &str) -> GeminiAnalyzer {
        let config = GeminiConfig::builder()
            .api_key("test-key")
            .api_url(api_url)
            .model("gemini-test")
            .build();
        GeminiAnalyzer::new(config).unwrap()
    }

    fn candidate(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = GeminiAnalyzer::new(GeminiConfig::default());
        assert!(matches!(result, Err(AnalysisError::Configuration(_))));
    }

    #[test]
    fn test_build_request_inlines_document() {
        let analyzer = analyzer_for("http://localhost");
        let document = InvoiceDocument::new(b"abc".to_vec()).with_content_type("image/png");

        let request = analyzer.build_request(&document);
        let value = serde_json::to_value(&request).unwrap();

        let parts = &value["contents"][0]["parts"];
        assert!(parts[0]["text"].as_str().unwrap().contains("invoice auditor"));
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "YWJj");
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(analyzer_for("http://localhost").name(), "GeminiAnalyzer");
    }

    #[tokio::test]
    async fn test_analyze_parses_fenced_reply() {
        let reply = "```json\n{\"lineItems\": [{\"description\": \"AC Tuneup\", \"quantity\": 1, \
                     \"unitPrice\": 120, \"total\": 120, \"flagged\": false}], \"trustScore\": 96, \
                     \"summary\": \"Matches baseline.\", \"flags\": [], \"savingsPotential\": 0, \
                     \"recommendedAction\": \"approve\"}\n```";
        let body = candidate(reply);
        let router = Router::new().route(
            "/v1beta/models/gemini-test:generateContent",
            post(move |Json(request): Json<Value>| {
                let body = body.clone();
                async move {
                    assert_eq!(request["contents"][0]["parts"][1]["inlineData"]["mimeType"], "image/jpeg");
                    Json(body)
                }
            }),
        );
        let url = spawn_upstream(router).await;

        let result = analyzer_for(&url)
            .analyze(&InvoiceDocument::new(vec![0xFF, 0xD8]))
            .await
            .unwrap();

        assert_eq!(result.line_items.len(), 1);
        assert_eq!(result.line_items[0].description, "AC Tuneup");
        assert_eq!(result.analysis.trust_score, 96.0);
        assert_eq!(result.analysis.recommended_action, RecommendedAction::Approve);
    }

    #[tokio::test]
    async fn test_analyze_surfaces_api_error() {
        let router = Router::new().route(
            "/v1beta/models/gemini-test:generateContent",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}})),
                )
            }),
        );
        let url = spawn_upstream(router).await;

        let err = analyzer_for(&url)
            .analyze(&InvoiceDocument::new(vec![1]))
            .await
            .unwrap_err();

        match err {
            AnalysisError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_json_reply() {
        let body = candidate("Sorry, this image is too blurry to read.");
        let router = Router::new().route(
            "/v1beta/models/gemini-test:generateContent",
            post(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );
        let url = spawn_upstream(router).await;

        let err = analyzer_for(&url)
            .analyze(&InvoiceDocument::new(vec![1]))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_analyze_unreachable_upstream() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = analyzer_for(&format!("http://{}", addr))
            .analyze(&InvoiceDocument::new(vec![1]))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Network(_)));
    }
}
