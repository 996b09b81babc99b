//! Per-conversation state.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::{MessageSource, StoredMessage};
use crate::window::DialogueWindow;

/// One customer-identified thread of messages and handoff state.
///
/// The conversation id is caller-supplied and immutable after creation.
/// Everything else is mutated only by the orchestration engine and the
/// operator-action handlers, under the store's per-conversation lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Stable conversation identifier (e.g. `5511999@c.us`).
    pub chat_id: String,
    /// Display name derived from the id's local part.
    pub customer_name: String,
    /// Append-only log of delivered and sent messages.
    pub messages: Vec<StoredMessage>,
    /// Whether a human operator currently owns the replies.
    pub human_active: bool,
    /// Timestamp of the last operator action. Only consulted while
    /// `human_active` is true.
    pub last_human_action: Option<DateTime<Utc>>,
    /// Whether the fixed welcome message has been sent.
    pub greeting_sent: bool,
    /// Objection categories already answered for this conversation.
    pub handled_objections: BTreeSet<String>,
    /// Bounded dialogue window used as LLM context.
    pub dialogue: DialogueWindow,
    /// When the conversation was first referenced.
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a conversation with default state.
    pub fn new(chat_id: impl Into<String>) -> Self {
        let chat_id = chat_id.into();
        let customer_name = chat_id
            .split_once('@')
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| chat_id.clone());

        Self {
            chat_id,
            customer_name,
            messages: Vec::new(),
            human_active: false,
            last_human_action: None,
            greeting_sent: false,
            handled_objections: BTreeSet::new(),
            dialogue: DialogueWindow::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a message to the log and return a clone of the entry.
    pub fn record(&mut self, source: MessageSource, text: impl Into<String>) -> StoredMessage {
        let message = StoredMessage::new(source, text);
        self.messages.push(message.clone());
        message
    }

    /// Record that an objection category has been answered.
    ///
    /// Returns true if the category was newly recorded, false if it had
    /// already been handled.
    pub fn record_objection(&mut self, category: impl Into<String>) -> bool {
        self.handled_objections.insert(category.into())
    }

    /// Whether an objection category has already been answered.
    pub fn objection_handled(&self, category: &str) -> bool {
        self.handled_objections.contains(category)
    }
}
