//! Observer-connect snapshot and status types.

use broadcaster::ChannelStatus;
use conversation_store::Conversation;
use serde::{Deserialize, Serialize};

/// Effective bot configuration shown to observers.
#[derive(Debug, Clone, Serialize)]
pub struct BotConfig {
    /// Whether the bot answers customer messages.
    pub auto_reply: bool,
    /// Human-takeover timeout in minutes.
    pub human_takeover_minutes: i64,
}

/// Payload delivered to an observer immediately on connect.
#[derive(Debug, Clone, Serialize)]
pub struct InitSnapshot {
    /// Current channel connection status.
    pub status: ChannelStatus,
    /// Effective bot configuration.
    pub config: BotConfig,
    /// Active provider name.
    pub provider: String,
    /// Active model id.
    pub model: String,
    /// Whether the active provider has a credential.
    pub ai_configured: bool,
    /// Number of registered conversations.
    pub active_conversations: usize,
    /// Full conversation list.
    pub conversations: Vec<Conversation>,
}

/// Partial channel-status update from the external transport.
///
/// Absent fields leave the current value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPatch {
    /// New connection flag.
    pub connected: Option<bool>,
    /// New pairing QR code.
    pub qr_code: Option<String>,
    /// New linked phone number.
    pub phone_number: Option<String>,
    /// New status line.
    pub status_text: Option<String>,
}

impl StatusPatch {
    /// Apply this patch to a status value.
    pub fn apply(&self, status: &mut ChannelStatus) {
        if let Some(connected) = self.connected {
            status.connected = connected;
        }
        if let Some(ref qr_code) = self.qr_code {
            status.qr_code = Some(qr_code.clone());
        }
        if let Some(ref phone_number) = self.phone_number {
            status.phone_number = Some(phone_number.clone());
        }
        if let Some(ref status_text) = self.status_text {
            status.status_text = status_text.clone();
        }
    }
}
