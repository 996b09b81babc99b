//! Configuration for GeminiResponder.

use std::env;
use std::time::Duration;

use responder_core::ResponderError;

/// Default request timeout for provider round trips.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for GeminiResponder.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Hard upper bound on the provider round trip.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            timeout: DEFAULT_TIMEOUT,
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
    /// - `GEMINI_MODEL` - Model name (default: gemini-2.5-flash)
    pub fn from_env() -> Result<Self, ResponderError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ResponderError::Configuration("GEMINI_API_KEY not set".to_string()))?;

        let api_url = env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        Ok(Self {
            api_url,
            api_key,
            model,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
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

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiConfig {
        self.config
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
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder() {
        let config = GeminiConfig::builder()
            .api_key("my-key")
            .api_url("https://test.api.com")
            .model("gemini-2.5-pro")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
