//! OpenRouterResponder implementation.

use reqwest::Client;
use responder_core::{async_trait, ChatContext, Responder, ResponderError, TurnRole};
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::OpenRouterConfig;

/// A responder backed by the OpenRouter chat-completions API.
///
/// The system instruction and dialogue turns are flattened into one
/// ordered message array; the request is bounded by the configured
/// timeout and authenticated with a bearer credential.
pub struct OpenRouterResponder {
    client: Client,
    config: OpenRouterConfig,
}

impl OpenRouterResponder {
    /// Create a new OpenRouterResponder with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Result<Self, ResponderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ResponderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(model = %config.model, "OpenRouterResponder initialized");

        Ok(Self { client, config })
    }

    /// Create an OpenRouterResponder from environment variables.
    ///
    /// See [`OpenRouterConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, ResponderError> {
        let config = OpenRouterConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Flatten the context into the wire message array.
    fn build_messages(&self, context: &ChatContext) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(context.turns.len() + 1);

        if !context.system.is_empty() {
            messages.push(ChatMessage::system(context.system.clone()));
        }

        for turn in &context.turns {
            messages.push(match turn.role {
                TurnRole::User => ChatMessage::user(turn.text.clone()),
                TurnRole::Assistant => ChatMessage::assistant(turn.text.clone()),
            });
        }

        messages
    }

    /// Make a chat completion request.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, ResponderError> {
        let url = format!("{}/api/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to OpenRouter: {:?}", request);

        let mut builder = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json");

        if let Some(ref referer) = self.config.referer {
            builder = builder.header("HTTP-Referer", referer);
        }
        if let Some(ref title) = self.config.title {
            builder = builder.header("X-Title", title);
        }

        let response = builder.json(&request).send().await.map_err(|e| {
            if e.is_timeout() {
                ResponderError::Timeout
            } else {
                ResponderError::Network(format!("Failed to send request: {}", e))
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(ResponderError::Api {
                    status: status.as_u16(),
                    message: api_error.error.message,
                });
            }

            return Err(ResponderError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ResponderError::Malformed(format!("Failed to parse response: {}", e)))?;

        Ok(completion)
    }
}

#[async_trait]
impl Responder for OpenRouterResponder {
    async fn generate(&self, context: ChatContext) -> Result<String, ResponderError> {
        if self.config.api_key.is_empty() {
            return Err(ResponderError::Configuration(
                "OpenRouter API key is not configured".to_string(),
            ));
        }

        let messages = self.build_messages(&context);
        let completion = self.chat_completion(messages).await?;

        let text = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| {
                warn!("OpenRouter response had no content");
                ResponderError::Malformed("response contained no message content".to_string())
            })?
            .to_string();

        if let Some(usage) = completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(text)
    }

    fn name(&self) -> &str {
        "OpenRouterResponder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use responder_core::ChatTurn;

    #[test]
    fn test_build_messages_system_first() {
        let config = OpenRouterConfig::builder().api_key("test-key").build();
        let responder = OpenRouterResponder::new(config).unwrap();

        let mut context = ChatContext::new("be brief");
        context.push(ChatTurn::user("oi"));
        context.push(ChatTurn::assistant("olá!"));
        context.push(ChatTurn::user("cardápio?"));

        let messages = responder.build_messages(&context);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "be brief");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "cardápio?");
    }

    #[test]
    fn test_build_messages_without_system() {
        let config = OpenRouterConfig::builder().api_key("test-key").build();
        let responder = OpenRouterResponder::new(config).unwrap();

        let mut context = ChatContext::new("");
        context.push(ChatTurn::user("oi"));

        let messages = responder.build_messages(&context);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let config = OpenRouterConfig::builder().build();
        let responder = OpenRouterResponder::new(config).unwrap();

        let mut context = ChatContext::new("system");
        context.push(ChatTurn::user("oi"));

        let err = responder.generate(context).await.unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_responder_name() {
        let config = OpenRouterConfig::builder().api_key("test-key").build();
        let responder = OpenRouterResponder::new(config).unwrap();
        assert_eq!(responder.name(), "OpenRouterResponder");
    }
}
