//! Canned responder implementation - fixed reply, records contexts.

use responder_core::{async_trait, ChatContext, Responder, ResponderError};
use tokio::sync::Mutex;

/// A responder that returns a fixed reply and records every context it
/// receives, so tests can assert on what was dispatched.
pub struct CannedResponder {
    reply: String,
    contexts: Mutex<Vec<ChatContext>>,
}

impl CannedResponder {
    /// Create a new CannedResponder with the given reply.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            contexts: Mutex::new(Vec::new()),
        }
    }

    /// Get all contexts received so far.
    pub async fn contexts(&self) -> Vec<ChatContext> {
        self.contexts.lock().await.clone()
    }

    /// Get the number of generation calls received.
    pub async fn call_count(&self) -> usize {
        self.contexts.lock().await.len()
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn generate(&self, context: ChatContext) -> Result<String, ResponderError> {
        self.contexts.lock().await.push(context);
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "CannedResponder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use responder_core::ChatTurn;

    #[tokio::test]
    async fn test_returns_fixed_reply() {
        let responder = CannedResponder::new("sempre isso");

        let mut context = ChatContext::new("sys");
        context.push(ChatTurn::user("oi"));

        let reply = responder.generate(context).await.unwrap();
        assert_eq!(reply, "sempre isso");
    }

    #[tokio::test]
    async fn test_records_contexts() {
        let responder = CannedResponder::new("ok");

        let mut first = ChatContext::new("sys");
        first.push(ChatTurn::user("um"));
        let mut second = ChatContext::new("sys");
        second.push(ChatTurn::user("dois"));

        responder.generate(first).await.unwrap();
        responder.generate(second).await.unwrap();

        let contexts = responder.contexts().await;
        assert_eq!(contexts.len(), 2);
        assert_eq!(contexts[0].turns[0].text, "um");
        assert_eq!(contexts[1].turns[0].text, "dois");
        assert_eq!(responder.call_count().await, 2);
    }
}
