//! GeminiResponder implementation.

use reqwest::Client;
use responder_core::{async_trait, ChatContext, Responder, ResponderError, TurnRole};
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, Part, SystemInstruction,
};
use crate::config::GeminiConfig;

/// A responder backed by the Gemini generateContent API.
///
/// Gemini models a conversational session: the system instruction is a
/// dedicated request field, prior turns are replayed as history, and the
/// final turn is delivered as the current message.
pub struct GeminiResponder {
    client: Client,
    config: GeminiConfig,
}

impl GeminiResponder {
    /// Create a new GeminiResponder with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ResponderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ResponderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(model = %config.model, "GeminiResponder initialized");

        Ok(Self { client, config })
    }

    /// Create a GeminiResponder from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, ResponderError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the request: history minus the final turn, then the final
    /// turn as the current message.
    fn build_request(&self, context: &ChatContext) -> GenerateContentRequest {
        let (history, current) = context.split_current();

        let mut contents = Vec::with_capacity(context.turns.len());
        for turn in history {
            contents.push(match turn.role {
                TurnRole::User => Content::user(turn.text.clone()),
                TurnRole::Assistant => Content::model(turn.text.clone()),
            });
        }
        if let Some(current) = current {
            contents.push(Content::user(current.text.clone()));
        }

        let system_instruction = if context.system.is_empty() {
            None
        } else {
            Some(SystemInstruction {
                parts: vec![Part::text(context.system.clone())],
            })
        };

        GenerateContentRequest {
            system_instruction,
            contents,
        }
    }
}

#[async_trait]
impl Responder for GeminiResponder {
    async fn generate(&self, context: ChatContext) -> Result<String, ResponderError> {
        if self.config.api_key.is_empty() {
            return Err(ResponderError::Configuration(
                "Gemini API key is not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        let request = self.build_request(&context);
        debug!("Sending request to Gemini: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResponderError::Timeout
                } else {
                    ResponderError::Network(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

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

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ResponderError::Malformed(format!("Failed to parse response: {}", e)))?;

        let text = completion
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| {
                warn!("Gemini response had no candidate text");
                ResponderError::Malformed("response contained no candidate text".to_string())
            })?;

        Ok(text)
    }

    fn name(&self) -> &str {
        "GeminiResponder"
    }
}
