//! Configuration for OpenRouterResponder.

use std::env;
use std::time::Duration;

use responder_core::ResponderError;

/// Default request timeout for provider round trips.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for OpenRouterResponder.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API base URL.
    pub api_url: String,

    /// API key for bearer authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Hard upper bound on the provider round trip.
    pub timeout: Duration,

    /// Optional HTTP-Referer header (the business site URL).
    pub referer: Option<String>,

    /// Optional X-Title header (the business name).
    pub title: Option<String>,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_url: "https://openrouter.ai".to_string(),
            api_key: String::new(),
            model: "deepseek/deepseek-r1:free".to_string(),
            max_tokens: Some(500),
            temperature: Some(0.7),
            timeout: DEFAULT_TIMEOUT,
            referer: None,
            title: None,
        }
    }
}

impl OpenRouterConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `OPENROUTER_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `OPENROUTER_API_URL` - API URL (default: https://openrouter.ai)
    /// - `OPENROUTER_MODEL` - Model name (default: deepseek/deepseek-r1:free)
    /// - `OPENROUTER_MAX_TOKENS` - Max tokens (default: 500)
    /// - `OPENROUTER_TEMPERATURE` - Temperature (default: 0.7)
    pub fn from_env() -> Result<Self, ResponderError> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| ResponderError::Configuration("OPENROUTER_API_KEY not set".to_string()))?;

        let api_url =
            env::var("OPENROUTER_API_URL").unwrap_or_else(|_| "https://openrouter.ai".to_string());

        let model = env::var("OPENROUTER_MODEL")
            .unwrap_or_else(|_| "deepseek/deepseek-r1:free".to_string());

        let max_tokens = env::var("OPENROUTER_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(500));

        let temperature = env::var("OPENROUTER_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(0.7));

        Ok(Self {
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
            timeout: DEFAULT_TIMEOUT,
            referer: None,
            title: None,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> OpenRouterConfigBuilder {
        OpenRouterConfigBuilder::default()
    }
}

/// Builder for OpenRouterConfig.
#[derive(Debug, Default)]
pub struct OpenRouterConfigBuilder {
    config: OpenRouterConfig,
}

impl OpenRouterConfigBuilder {
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

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the HTTP-Referer header value.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.config.referer = Some(referer.into());
        self
    }

    /// Set the X-Title header value.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OpenRouterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenRouterConfig::default();

        assert_eq!(config.api_url, "https://openrouter.ai");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "deepseek/deepseek-r1:free");
        assert_eq!(config.max_tokens, Some(500));
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.referer.is_none());
        assert!(config.title.is_none());
    }

    #[test]
    fn test_builder_all_options() {
        let config = OpenRouterConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .model("meta-llama/llama-3.3-70b-instruct:free")
            .max_tokens(256)
            .temperature(0.5)
            .timeout(Duration::from_secs(5))
            .referer("https://example.shop")
            .title("Example")
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "meta-llama/llama-3.3-70b-instruct:free");
        assert_eq!(config.max_tokens, Some(256));
        assert_eq!(config.temperature, Some(0.5));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.referer.as_deref(), Some("https://example.shop"));
        assert_eq!(config.title.as_deref(), Some("Example"));
    }
}
