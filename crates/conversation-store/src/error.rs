//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No conversation exists under the given id.
    #[error("conversation not found: {chat_id}")]
    NotFound { chat_id: String },
}
