//! AI dispatch with provider lookup and fallback.

use std::sync::Arc;

use gemini_responder::{GeminiConfig, GeminiResponder};
use indexmap::IndexMap;
use openrouter_responder::{OpenRouterConfig, OpenRouterResponder};
use responder_core::{ChatContext, ChatTurn, Responder, ResponderError};
use tracing::{info, warn};

use crate::settings::{Settings, SettingsHandle, PROVIDER_GEMINI, PROVIDER_OPENROUTER};
use crate::templates;

/// How many stored dialogue turns are sent as context (5 exchanges).
pub const CONTEXT_TURNS: usize = 10;

/// Dispatches generation requests to the active provider.
///
/// The provider is a runtime lookup keyed by the settings snapshot taken
/// at dispatch time, so configuration changes take effect on the next
/// message. Registered responders (used by tests, or to swap in a custom
/// backend) take precedence over the built-in constructors.
///
/// [`generate`](AiDispatcher::generate) never fails: every
/// [`ResponderError`] is logged and converted to the deterministic
/// fallback reply. The dispatcher never mutates conversation state.
pub struct AiDispatcher {
    settings: SettingsHandle,
    registry: IndexMap<String, Arc<dyn Responder>>,
}

impl AiDispatcher {
    /// Create a dispatcher over the given settings handle.
    pub fn new(settings: SettingsHandle) -> Self {
        Self {
            settings,
            registry: IndexMap::new(),
        }
    }

    /// Register a responder for a provider name, overriding the built-in
    /// constructor for that name.
    pub fn with_responder(
        mut self,
        provider: impl Into<String>,
        responder: Arc<dyn Responder>,
    ) -> Self {
        self.registry.insert(provider.into(), responder);
        self
    }

    /// Generate a reply for the inbound text, degrading to the fallback
    /// reply on any provider failure.
    pub async fn generate(&self, window: &[ChatTurn], inbound: &str) -> String {
        let settings = self.settings.read().await.clone();
        let context = build_context(&settings, window, inbound);

        match self.try_generate(&settings, context).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    provider = %settings.provider,
                    model = %settings.selected_model,
                    error = %e,
                    "generation failed, using fallback reply"
                );
                templates::fallback_reply(&settings)
            }
        }
    }

    /// Direct connectivity test against the active provider.
    ///
    /// Unlike [`generate`](AiDispatcher::generate) this surfaces
    /// configuration and dispatch errors to the caller.
    pub async fn probe(&self) -> Result<String, ResponderError> {
        let settings = self.settings.read().await.clone();

        let mut context = ChatContext::new(templates::PROBE_SYSTEM);
        context.push(ChatTurn::user(templates::PROBE_MESSAGE));

        let responder = self.responder_for(&settings)?;
        info!(provider = %settings.provider, model = %settings.selected_model, "probing provider");
        responder.generate(context).await
    }

    async fn try_generate(
        &self,
        settings: &Settings,
        context: ChatContext,
    ) -> Result<String, ResponderError> {
        let responder = self.responder_for(settings)?;
        info!(
            provider = %settings.provider,
            model = %settings.selected_model,
            turns = context.turns.len(),
            "dispatching generation request"
        );
        responder.generate(context).await
    }

    /// Look up the active provider, building it from the current settings
    /// when no responder is registered under that name.
    fn responder_for(&self, settings: &Settings) -> Result<Arc<dyn Responder>, ResponderError> {
        if let Some(responder) = self.registry.get(settings.provider.as_str()) {
            return Ok(responder.clone());
        }

        match settings.provider.as_str() {
            PROVIDER_OPENROUTER => {
                let config = OpenRouterConfig::builder()
                    .api_key(settings.openrouter_api_key.clone())
                    .model(settings.selected_model.clone())
                    .referer(settings.site_url.clone())
                    .title(settings.business_name.clone())
                    .build();
                Ok(Arc::new(OpenRouterResponder::new(config)?))
            }
            PROVIDER_GEMINI => {
                let config = GeminiConfig::builder()
                    .api_key(settings.gemini_api_key.clone())
                    .model(settings.selected_model.clone())
                    .build();
                Ok(Arc::new(GeminiResponder::new(config)?))
            }
            other => Err(ResponderError::Configuration(format!(
                "unknown provider: {}",
                other
            ))),
        }
    }
}

/// Build the outbound context: templated system instruction, the most
/// recent stored turns, then the inbound text as the final user turn.
fn build_context(settings: &Settings, window: &[ChatTurn], inbound: &str) -> ChatContext {
    let mut context = ChatContext::new(templates::system_prompt(settings));

    let start = window.len().saturating_sub(CONTEXT_TURNS);
    for turn in &window[start..] {
        context.push(turn.clone());
    }

    context.push(ChatTurn::user(inbound));
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use responder_core::TurnRole;

    fn settings_handle() -> SettingsHandle {
        Settings::default().into_handle()
    }

    #[test]
    fn test_build_context_shape() {
        let settings = Settings::default();
        let window = vec![
            ChatTurn::user("oi"),
            ChatTurn::assistant("olá!"),
        ];

        let context = build_context(&settings, &window, "tem combo?");

        assert!(context.system.contains(&settings.business_name));
        assert!(context.system.contains(&settings.site_url));
        assert_eq!(context.turns.len(), 3);
        assert_eq!(context.turns[2].role, TurnRole::User);
        assert_eq!(context.turns[2].text, "tem combo?");
    }

    #[test]
    fn test_build_context_limits_history() {
        let settings = Settings::default();
        let mut window = Vec::new();
        for i in 0..10 {
            window.push(ChatTurn::user(format!("pergunta {i}")));
            window.push(ChatTurn::assistant(format!("resposta {i}")));
        }

        let context = build_context(&settings, &window, "atual");

        // 10 stored turns plus the inbound text.
        assert_eq!(context.turns.len(), CONTEXT_TURNS + 1);
        assert_eq!(context.turns[0].text, "pergunta 5");
        assert_eq!(context.turns[10].text, "atual");
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_unknown_provider() {
        let settings = Settings {
            provider: "nonexistent".to_string(),
            ..Settings::default()
        };
        let site = settings.site_url.clone();
        let dispatcher = AiDispatcher::new(settings.into_handle());

        let reply = dispatcher.generate(&[], "oi").await;
        assert!(reply.contains(&site));
        assert!(reply.contains("problema técnico"));
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_missing_credential() {
        // Default settings select openrouter with an empty key; the
        // responder fails fast before any network I/O.
        let dispatcher = AiDispatcher::new(settings_handle());

        let reply = dispatcher.generate(&[], "oi").await;
        assert!(reply.contains("https://sushiakicb.shop"));
    }

    #[tokio::test]
    async fn test_probe_surfaces_configuration_error() {
        let dispatcher = AiDispatcher::new(settings_handle());

        let err = dispatcher.probe().await.unwrap_err();
        assert!(err.is_configuration());
    }
}
