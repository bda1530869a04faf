//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use mock_analyzer::DEFAULT_CANNED_DELAY_MS;

/// Values stamped onto uploaded invoices when the form leaves them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoDefaults {
    pub org_id: String,
    pub vendor_id: String,
    pub property_id: String,
    /// Stored as `fileUrl`; uploads are analyzed but not kept.
    pub file_url: String,
}

impl Default for DemoDefaults {
    fn default() -> Self {
        Self {
            org_id: "org-1".to_string(),
            vendor_id: "vend-2".to_string(),
            property_id: "prop-1".to_string(),
            file_url: "/invoices/sample_upload.jpg".to_string(),
        }
    }
}

/// Review dashboard configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Upload defaults.
    pub defaults: DemoDefaults,
    /// Simulated latency of the canned analyzer.
    pub mock_delay_ms: u64,
    /// Use the canned analysis when the AI call fails.
    pub fallback_on_error: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `REVIEW_ADDR` | Server bind address | `127.0.0.1:3000` |
    /// | `DEFAULT_ORG_ID` | Organization stamped on uploads | `org-1` |
    /// | `DEFAULT_VENDOR_ID` | Vendor when the form omits one | `vend-2` |
    /// | `DEFAULT_PROPERTY_ID` | Property when the form omits one | `prop-1` |
    /// | `UPLOAD_FILE_URL` | `fileUrl` of uploaded invoices | `/invoices/sample_upload.jpg` |
    /// | `MOCK_ANALYSIS_DELAY_MS` | Canned analyzer delay | `2500` |
    /// | `ANALYSIS_FALLBACK_ON_ERROR` | Fall back when the AI call fails | `true` |
    ///
    /// The Gemini analyzer reads its own `GEMINI_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("REVIEW_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let fallback = DemoDefaults::default();
        let defaults = DemoDefaults {
            org_id: env_or("DEFAULT_ORG_ID", fallback.org_id),
            vendor_id: env_or("DEFAULT_VENDOR_ID", fallback.vendor_id),
            property_id: env_or("DEFAULT_PROPERTY_ID", fallback.property_id),
            file_url: env_or("UPLOAD_FILE_URL", fallback.file_url),
        };

        let mock_delay_ms = match env::var("MOCK_ANALYSIS_DELAY_MS") {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("MOCK_ANALYSIS_DELAY_MS"))?,
            Err(_) => DEFAULT_CANNED_DELAY_MS,
        };

        let fallback_on_error = match env::var("ANALYSIS_FALLBACK_ON_ERROR") {
            Ok(value) => parse_bool(&value)
                .ok_or(ConfigError::InvalidBool("ANALYSIS_FALLBACK_ON_ERROR"))?,
            Err(_) => true,
        };

        Ok(Self {
            addr,
            defaults,
            mock_delay_ms,
            fallback_on_error,
        })
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid REVIEW_ADDR format")]
    InvalidAddr,

    #[error("{0} must be a whole number of milliseconds")]
    InvalidNumber(&'static str),

    #[error("{0} must be true or false")]
    InvalidBool(&'static str),
}
