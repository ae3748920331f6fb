use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    /// No request timeout unless one is given; a hung call is left to the
    /// transport.
    pub fn new(api_key: String, model: String, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}
