//! Error types for engine operations.

use conversation_store::StoreError;
use thiserror::Error;

/// Errors that can occur during engine operations.
///
/// Generation failures never appear here: the dispatcher degrades them to
/// the fallback reply, and broadcast failures are recovered per observer
/// inside the broadcaster.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A non-creating lookup referenced an unknown conversation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
