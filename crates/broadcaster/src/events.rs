//! Typed state-change events.

use conversation_store::StoredMessage;
use serde::{Deserialize, Serialize};

/// Connection state of the messaging channel, as reported by the
/// external transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStatus {
    /// Whether the transport is connected.
    pub connected: bool,
    /// Pairing QR code, when the transport is waiting to be linked.
    pub qr_code: Option<String>,
    /// Phone number of the linked account.
    pub phone_number: Option<String>,
    /// Human-readable status line.
    pub status_text: String,
}

impl Default for ChannelStatus {
    fn default() -> Self {
        Self {
            connected: false,
            qr_code: None,
            phone_number: None,
            status_text: "Desconectado".to_string(),
        }
    }
}

/// A state-change event fanned out to every connected observer.
///
/// Serializes with a `type` tag so the WebSocket layer can forward events
/// verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A customer message was recorded.
    MessageReceived {
        chat_id: String,
        message: StoredMessage,
    },
    /// A bot or operator message was recorded.
    MessageSent {
        chat_id: String,
        message: StoredMessage,
    },
    /// An operator took over a conversation.
    HumanTakeover { chat_id: String },
    /// A conversation was released back to the bot.
    BotResumed { chat_id: String },
    /// The messaging channel reported a status change.
    StatusUpdate { status: ChannelStatus },
    /// The runtime configuration changed.
    ConfigUpdated,
}

#[cfg(test)]
mod tests {
    use super::*;
    use conversation_store::MessageSource;

    #[test]
    fn test_event_type_tag() {
        let event = Event::HumanTakeover {
            chat_id: "5511999@c.us".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "human_takeover");
        assert_eq!(json["chat_id"], "5511999@c.us");
    }

    #[test]
    fn test_message_event_carries_payload() {
        let message = StoredMessage::new(MessageSource::Bot, "olá!");
        let event = Event::MessageSent {
            chat_id: "5511999@c.us".to_string(),
            message,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "message_sent");
        assert_eq!(json["message"]["source"], "bot");
        assert_eq!(json["message"]["text"], "olá!");
    }

    #[test]
    fn test_default_status() {
        let status = ChannelStatus::default();
        assert!(!status.connected);
        assert_eq!(status.status_text, "Desconectado");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["qr_code"], serde_json::Value::Null);
    }
}
