//! Sequence responder implementation - scripted replies.

use std::collections::VecDeque;

use responder_core::{async_trait, ChatContext, Responder, ResponderError};
use tokio::sync::Mutex;

/// A responder that pops replies from a script, failing when it runs dry.
///
/// Useful for multi-turn engine tests where each call must produce a
/// different reply.
pub struct SequenceResponder {
    replies: Mutex<VecDeque<String>>,
}

impl SequenceResponder {
    /// Create a new SequenceResponder from the given replies.
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
        }
    }

    /// Get the number of replies left in the script.
    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl Responder for SequenceResponder {
    async fn generate(&self, _context: ChatContext) -> Result<String, ResponderError> {
        self.replies
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| ResponderError::Malformed("reply script exhausted".to_string()))
    }

    fn name(&self) -> &str {
        "SequenceResponder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pops_in_order() {
        let responder = SequenceResponder::new(["primeira", "segunda"]);

        assert_eq!(
            responder.generate(ChatContext::new("s")).await.unwrap(),
            "primeira"
        );
        assert_eq!(
            responder.generate(ChatContext::new("s")).await.unwrap(),
            "segunda"
        );
        assert_eq!(responder.remaining().await, 0);
    }

    #[tokio::test]
    async fn test_fails_when_exhausted() {
        let responder = SequenceResponder::new(Vec::<String>::new());
        let err = responder.generate(ChatContext::new("s")).await.unwrap_err();
        assert!(matches!(err, ResponderError::Malformed(_)));
    }
}
