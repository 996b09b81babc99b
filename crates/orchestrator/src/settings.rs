//! Runtime settings read by the engine and dispatcher.
//!
//! The engine never mutates these; configuration management (an external
//! collaborator) owns the write side and calls
//! [`Engine::notify_config_updated`](crate::Engine::notify_config_updated)
//! after a change.

use std::env;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Name of the REST chat-completions provider.
pub const PROVIDER_OPENROUTER: &str = "openrouter";

/// Name of the conversational-session provider.
pub const PROVIDER_GEMINI: &str = "gemini";

/// Process-wide bot configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Active provider name (`openrouter` or `gemini`).
    pub provider: String,
    /// Active model id for the selected provider.
    pub selected_model: String,
    /// OpenRouter credential.
    pub openrouter_api_key: String,
    /// Gemini credential.
    pub gemini_api_key: String,
    /// Whether the bot answers customer messages at all.
    pub auto_reply: bool,
    /// Minutes after the last operator action before the bot reclaims a
    /// human-controlled conversation.
    pub human_takeover_minutes: i64,
    /// Canonical order site, used in every templated reply.
    pub site_url: String,
    /// Business name, used in every templated reply.
    pub business_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: PROVIDER_OPENROUTER.to_string(),
            selected_model: "deepseek/deepseek-r1:free".to_string(),
            openrouter_api_key: String::new(),
            gemini_api_key: String::new(),
            auto_reply: true,
            human_takeover_minutes: 60,
            site_url: "https://sushiakicb.shop".to_string(),
            business_name: "Sushi Aki".to_string(),
        }
    }
}

impl Settings {
    /// Create settings from environment variables.
    ///
    /// Optional environment variables:
    /// - `SORA_PROVIDER` - Active provider (default: openrouter)
    /// - `SORA_MODEL` - Model id (default: deepseek/deepseek-r1:free)
    /// - `OPENROUTER_API_KEY` / `GEMINI_API_KEY` - Provider credentials
    /// - `SORA_AUTO_REPLY` - Auto-reply toggle (default: true)
    /// - `SORA_TAKEOVER_MINUTES` - Human-takeover timeout (default: 60)
    /// - `SORA_SITE_URL` - Order site URL
    /// - `SORA_BUSINESS_NAME` - Business name
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let provider = env::var("SORA_PROVIDER").unwrap_or(defaults.provider);
        let selected_model = env::var("SORA_MODEL").unwrap_or(defaults.selected_model);
        let openrouter_api_key = env::var("OPENROUTER_API_KEY").unwrap_or_default();
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let auto_reply = env::var("SORA_AUTO_REPLY")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(defaults.auto_reply);

        let human_takeover_minutes = env::var("SORA_TAKEOVER_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.human_takeover_minutes);

        let site_url = env::var("SORA_SITE_URL").unwrap_or(defaults.site_url);
        let business_name = env::var("SORA_BUSINESS_NAME").unwrap_or(defaults.business_name);

        Self {
            provider,
            selected_model,
            openrouter_api_key,
            gemini_api_key,
            auto_reply,
            human_takeover_minutes,
            site_url,
            business_name,
        }
    }

    /// Credential for the active provider, empty when unset or the
    /// provider is unknown.
    pub fn active_api_key(&self) -> &str {
        match self.provider.as_str() {
            PROVIDER_OPENROUTER => &self.openrouter_api_key,
            PROVIDER_GEMINI => &self.gemini_api_key,
            _ => "",
        }
    }

    /// Whether the active provider has a credential.
    pub fn ai_configured(&self) -> bool {
        !self.active_api_key().is_empty()
    }

    /// Wrap these settings in a shared read handle.
    pub fn into_handle(self) -> SettingsHandle {
        Arc::new(RwLock::new(self))
    }
}

/// Shared read handle for [`Settings`]; configuration management owns the
/// write side.
pub type SettingsHandle = Arc<RwLock<Settings>>;
