//! Mock responder implementations for Sora reply generation.
//!
//! This crate provides mock implementations of the `Responder` trait for
//! testing:
//! - `CannedResponder` - Returns a fixed reply and records every context
//! - `FailingResponder` - Always fails with a configured error
//! - `SequenceResponder` - Pops scripted replies, fails when exhausted
//!
//! For production generation, use the `openrouter-responder` or
//! `gemini-responder` crates instead.
//!
//! # Example
//!
//! ```rust
//! use mock_responder::{CannedResponder, Responder};
//! use responder_core::{ChatContext, ChatTurn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), responder_core::ResponderError> {
//!     let responder = CannedResponder::new("Tudo certo!");
//!
//!     let mut context = ChatContext::new("system");
//!     context.push(ChatTurn::user("oi"));
//!
//!     let reply = responder.generate(context).await?;
//!     assert_eq!(reply, "Tudo certo!");
//!     Ok(())
//! }
//! ```

mod canned;
mod failing;
mod sequence;

// Re-export responder-core types for convenience
pub use responder_core::{async_trait, ChatContext, ChatTurn, Responder, ResponderError, TurnRole};

// Export mock implementations
pub use canned::CannedResponder;
pub use failing::FailingResponder;
pub use sequence::SequenceResponder;
