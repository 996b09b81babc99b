//! Failing responder implementation - always errors.

use responder_core::{async_trait, ChatContext, Responder, ResponderError};

type ErrorFactory = Box<dyn Fn() -> ResponderError + Send + Sync>;

/// A responder that always fails with a configured error.
///
/// Useful for exercising the dispatcher's fallback path.
pub struct FailingResponder {
    make_error: ErrorFactory,
}

impl FailingResponder {
    /// Create a responder failing with errors from the given factory.
    pub fn new(make_error: impl Fn() -> ResponderError + Send + Sync + 'static) -> Self {
        Self {
            make_error: Box::new(make_error),
        }
    }

    /// Create a responder that always times out.
    pub fn timeout() -> Self {
        Self::new(|| ResponderError::Timeout)
    }

    /// Create a responder that always returns an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move || ResponderError::Api {
            status,
            message: message.clone(),
        })
    }

    /// Create a responder that always reports a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move || ResponderError::Configuration(message.clone()))
    }
}

#[async_trait]
impl Responder for FailingResponder {
    async fn generate(&self, _context: ChatContext) -> Result<String, ResponderError> {
        Err((self.make_error)())
    }

    fn name(&self) -> &str {
        "FailingResponder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_timeout_variant() {
        let responder = FailingResponder::timeout();
        let err = responder.generate(ChatContext::new("sys")).await.unwrap_err();
        assert!(matches!(err, ResponderError::Timeout));
    }

    #[tokio::test]
    async fn test_api_variant() {
        let responder = FailingResponder::api(500, "boom");
        let err = responder.generate(ChatContext::new("sys")).await.unwrap_err();
        match err {
            ResponderError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_configuration_variant() {
        let responder = FailingResponder::configuration("no key");
        let err = responder.generate(ChatContext::new("sys")).await.unwrap_err();
        assert!(err.is_configuration());
    }
}
