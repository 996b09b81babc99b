//! Gemini-backed responder for the Sora chat agent.
//!
//! This crate implements the [`Responder`](responder_core::Responder) trait
//! against the Gemini generateContent API. Unlike the chat-completions
//! shape, the system instruction travels in its own request field: prior
//! turns become the session history and the final turn is sent as the
//! current message.

mod api_types;
mod config;
mod responder;

pub use api_types::{Content, GenerateContentRequest, GenerateContentResponse, Part};
pub use config::{GeminiConfig, GeminiConfigBuilder};
pub use responder::GeminiResponder;
