//! Error types for reply generation.

use thiserror::Error;

/// Errors that can occur while generating a reply.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The provider is not usable as configured (missing credential,
    /// unknown provider selection). Raised before any network I/O.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be delivered.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered, but the body could not be used.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The request exceeded the dispatch timeout.
    #[error("request timed out")]
    Timeout,
}

impl ResponderError {
    /// Whether this is a configuration problem rather than a dispatch failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ResponderError::Configuration(_))
    }
}
