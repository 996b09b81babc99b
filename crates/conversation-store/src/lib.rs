//! In-memory conversation registry for the Sora chat agent.
//!
//! This crate is the single source of truth for per-conversation state:
//! the append-only message log, bot/human handoff flags, the recorded
//! objection categories, and the bounded dialogue window used as LLM
//! context. It defines:
//!
//! - [`Conversation`] / [`StoredMessage`] - Per-conversation state and log entries
//! - [`DialogueWindow`] - Bounded turn window with pair-atomic truncation
//! - [`ConversationStore`] - Registry keyed by conversation id with
//!   per-conversation locking
//! - [`StoreError`] - Error types for non-creating lookups
//!
//! State is process-lifetime only; nothing here persists across restarts.

mod conversation;
mod error;
mod message;
mod store;
mod window;

pub use conversation::Conversation;
pub use error::StoreError;
pub use message::{MessageSource, StoredMessage};
pub use store::ConversationStore;
pub use window::{DialogueWindow, MAX_WINDOW_ENTRIES};
