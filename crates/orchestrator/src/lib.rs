//! Conversation orchestration engine for the Sora chat agent.
//!
//! This crate provides the [`Engine`] type: the per-conversation state
//! machine that decides, for each inbound customer message, whether a
//! human operator or the automated responder produces the reply, and
//! publishes every state change to connected observers.
//!
//! # Architecture
//!
//! ```text
//! Inbound webhook message
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         ENGINE                              │
//! │                                                             │
//! │  1. Record message, broadcast message_received              │
//! │         ↓                                                   │
//! │  2. Handoff check: human active within the takeover window  │
//! │     → stay silent; window expired → reclaim for the bot     │
//! │         ↓                                                   │
//! │  3. Pick the reply:                                         │
//! │     • first contact → fixed welcome                         │
//! │     • distrust keyword (once per conversation) → rebuttal   │
//! │     • otherwise → AI dispatch with windowed history,        │
//! │       degrading to the fallback reply on any failure        │
//! │         ↓                                                   │
//! │  4. Record reply, broadcast message_sent                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operator actions (takeover, release, manual send), the CRUD surface,
//! channel-status updates, and the observer-connect snapshot flow through
//! the same engine. The HTTP/WebSocket routing layer and the messaging
//! transport live outside this crate and drive it through these methods.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use broadcaster::Broadcaster;
//! use conversation_store::ConversationStore;
//! use orchestrator::{AiDispatcher, Engine, Settings};
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = Settings::from_env().into_handle();
//!     let engine = Engine::new(
//!         Arc::new(ConversationStore::new()),
//!         AiDispatcher::new(settings.clone()),
//!         Broadcaster::spawn(),
//!         settings,
//!     );
//!
//!     let outcome = engine.on_customer_message("5511999@c.us", "oi").await;
//!     println!("reply: {:?}", outcome.reply());
//! }
//! ```

mod dispatch;
mod engine;
mod error;
mod objection;
mod outcome;
mod settings;
mod snapshot;
mod templates;

// Public exports
pub use dispatch::{AiDispatcher, CONTEXT_TURNS};
pub use engine::Engine;
pub use error::EngineError;
pub use objection::{detects_distrust, DISTRUST_CATEGORY, DISTRUST_KEYWORDS};
pub use outcome::{NoReplyReason, ReplyOutcome};
pub use settings::{Settings, SettingsHandle, PROVIDER_GEMINI, PROVIDER_OPENROUTER};
pub use snapshot::{BotConfig, InitSnapshot, StatusPatch};
pub use templates::{distrust_rebuttal, fallback_reply, system_prompt, welcome_message};

// Re-export commonly used types from dependencies
pub use broadcaster::{Broadcaster, ChannelStatus, Event, ObserverHandle};
pub use conversation_store::{Conversation, ConversationStore, MessageSource, StoredMessage};
pub use responder_core::{ChatContext, ChatTurn, Responder, ResponderError, TurnRole};
