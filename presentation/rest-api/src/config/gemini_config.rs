use std::time::Duration;

use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Configuration for the price recognition service.
///
/// Price scanning is only offered when an API key is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GEMINI_API_KEY: service credential (scanning disabled when unset)
    /// - GEMINI_MODEL: model identifier (default: "gemini-2.5-flash")
    /// - GEMINI_BASE_URL: API root (default: Google's v1beta endpoint)
    /// - GEMINI_TIMEOUT_SECS: request timeout (default: none)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = get("GEMINI_API_KEY").filter(|key| !key.trim().is_empty());
        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = get("GEMINI_TIMEOUT_SECS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .map(Duration::from_secs);

        Self {
            api_key,
            model,
            base_url,
            timeout,
        }
    }

    pub fn scan_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
