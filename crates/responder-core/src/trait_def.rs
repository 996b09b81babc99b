//! The Responder trait definition.

use async_trait::async_trait;

use crate::context::ChatContext;
use crate::error::ResponderError;

/// A trait for turning a dialogue context into a generated reply.
///
/// Implementations range from hosted chat-completions APIs to canned
/// test doubles. This trait is object-safe and can be used with
/// `Arc<dyn Responder>`.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Generate a reply for the given context.
    ///
    /// The final turn of `context` is the customer message being answered.
    /// Returns the generated text, or an error describing why generation
    /// failed. Implementations do not retry.
    async fn generate(&self, context: ChatContext) -> Result<String, ResponderError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}
