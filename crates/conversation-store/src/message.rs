//! Message-log entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSource {
    /// The customer, via the inbound webhook.
    Customer,
    /// The automated responder.
    Bot,
    /// A human operator.
    Human,
}

/// One entry of a conversation's append-only message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Unique message id.
    pub id: String,
    /// Who produced the message.
    pub source: MessageSource,
    /// Message text.
    pub text: String,
    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
}

impl StoredMessage {
    /// Create a new log entry stamped with the current time.
    pub fn new(source: MessageSource, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}
