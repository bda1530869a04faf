//! Configuration for GeminiAnalyzer.

use analysis_core::AnalysisError;
use std::env;
use std::path::Path;

use crate::prompt::AUDITOR_PROMPT;

/// Default Gemini API URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Configuration for GeminiAnalyzer.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Gemini API URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Prompt sent alongside the document.
    pub prompt: String,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_output_tokens: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            prompt: AUDITOR_PROMPT.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl GeminiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GEMINI_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_MODEL` - Model name (default: gemini-2.5-flash-lite)
    /// - `GEMINI_PROMPT_FILE` - Path to a prompt file replacing the built-in auditor prompt
    /// - `GEMINI_TEMPERATURE` - Temperature (default: unset)
    /// - `GEMINI_MAX_OUTPUT_TOKENS` - Max output tokens (default: unset)
    pub fn from_env() -> Result<Self, AnalysisError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AnalysisError::Configuration("GEMINI_API_KEY not set".to_string()))?;

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let prompt = env::var("GEMINI_PROMPT_FILE")
            .ok()
            .and_then(load_prompt_file)
            .unwrap_or_else(|| AUDITOR_PROMPT.to_string());

        let temperature = env::var("GEMINI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let max_output_tokens = env::var("GEMINI_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            api_url,
            api_key,
            model,
            prompt,
            temperature,
            max_output_tokens,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Builder for GeminiConfig.
#[derive(Debug, Default)]
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl GeminiConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the prompt.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the max output tokens.
    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.config.max_output_tokens = Some(tokens);
        self
    }

    /// Load the prompt from a file.
    ///
    /// If the file exists and is non-empty, replaces the prompt.
    /// Returns self for chaining.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(prompt) = load_prompt_file(path) {
            self.config.prompt = prompt;
        }
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiConfig {
        self.config
    }
}

/// Load a prompt file, returning None if not found or empty.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::default();

        assert_eq!(config.api_url, "https://generativelanguage.googleapis.com");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gemini-2.5-flash-lite");
        assert_eq!(config.prompt, AUDITOR_PROMPT);
        assert!(config.temperature.is_none());
        assert!(config.max_output_tokens.is_none());
    }

    #[test]
    fn test_endpoint() {
        let config = GeminiConfig::builder()
            .api_url("http://127.0.0.1:9999/")
            .model("gemini-test")
            .build();

        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9999/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_builder_all_options() {
        let config = GeminiConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .model("gemini-2.5-pro")
            .prompt("Extract the line items")
            .temperature(0.2)
            .max_output_tokens(2048)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.prompt, "Extract the line items");
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_output_tokens, Some(2048));
    }

    #[test]
    fn test_missing_prompt_file_keeps_default() {
        let config = GeminiConfig::builder()
            .load_prompt_file("/nonexistent/prompt.md")
            .build();

        assert_eq!(config.prompt, AUDITOR_PROMPT);
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_gemini_vars() {
            std::env::remove_var("GEMINI_API_KEY");
            std::env::remove_var("GEMINI_API_URL");
            std::env::remove_var("GEMINI_MODEL");
            std::env::remove_var("GEMINI_PROMPT_FILE");
            std::env::remove_var("GEMINI_TEMPERATURE");
            std::env::remove_var("GEMINI_MAX_OUTPUT_TOKENS");
        }

        // Missing API key should error
        clear_all_gemini_vars();
        match GeminiConfig::from_env() {
            Err(AnalysisError::Configuration(msg)) => assert!(msg.contains("GEMINI_API_KEY")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // Blank API key counts as missing
        std::env::set_var("GEMINI_API_KEY", "   ");
        assert!(GeminiConfig::from_env().is_err());

        // Only API key set, defaults used
        clear_all_gemini_vars();
        std::env::set_var("GEMINI_API_KEY", "test-env-key");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.prompt, AUDITOR_PROMPT);
        assert!(config.temperature.is_none());

        // All vars set
        std::env::set_var("GEMINI_API_URL", "https://test.api.com");
        std::env::set_var("GEMINI_MODEL", "gemini-test");
        std::env::set_var("GEMINI_TEMPERATURE", "0.4");
        std::env::set_var("GEMINI_MAX_OUTPUT_TOKENS", "4096");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.temperature, Some(0.4));
        assert_eq!(config.max_output_tokens, Some(4096));

        clear_all_gemini_vars();
    }
}
