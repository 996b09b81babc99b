//! Core trait and types for reply-generation providers.
//!
//! This crate provides the shared interface for all reply-generation
//! backends in the Sora chat agent. It defines:
//!
//! - [`Responder`] - The trait that all provider implementations must implement
//! - [`ChatContext`] / [`ChatTurn`] - The ordered role/text context sent to a provider
//! - [`ResponderError`] - Error types for generation failures
//!
//! # Example
//!
//! ```rust
//! use responder_core::{ChatContext, Responder, ResponderError};
//! use async_trait::async_trait;
//!
//! struct MyResponder;
//!
//! #[async_trait]
//! impl Responder for MyResponder {
//!     async fn generate(&self, context: ChatContext) -> Result<String, ResponderError> {
//!         let _ = context;
//!         Ok("Hello!".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyResponder"
//!     }
//! }
//! ```

mod context;
mod error;
mod trait_def;

pub use context::{ChatContext, ChatTurn, TurnRole};
pub use error::ResponderError;
pub use trait_def::Responder;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
