//! OpenRouter-backed responder for the Sora chat agent.
//!
//! This crate implements the [`Responder`](responder_core::Responder) trait
//! against the OpenRouter chat-completions API. The system instruction and
//! dialogue turns are sent as one ordered message array with bearer
//! authentication, and every request carries a hard timeout.

mod api_types;
mod config;
mod responder;

pub use api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use config::{OpenRouterConfig, OpenRouterConfigBuilder};
pub use responder::OpenRouterResponder;
