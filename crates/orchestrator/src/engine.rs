//! The per-conversation state machine.

use std::sync::Arc;

use broadcaster::{Broadcaster, ChannelStatus, Event};
use chrono::Utc;
use conversation_store::{Conversation, ConversationStore, MessageSource, StoredMessage};
use responder_core::ResponderError;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::dispatch::AiDispatcher;
use crate::error::EngineError;
use crate::objection::{self, DISTRUST_CATEGORY};
use crate::outcome::{NoReplyReason, ReplyOutcome};
use crate::settings::SettingsHandle;
use crate::snapshot::{BotConfig, InitSnapshot, StatusPatch};
use crate::templates;

/// Result of the handoff check at the top of the inbound handler.
enum HandoffCheck {
    /// The operator is still within the takeover window.
    StillHuman,
    /// The window expired; the conversation was reclaimed for the bot.
    Reclaimed,
    /// Human-controlled but no operator action on record; bot processing
    /// proceeds.
    NoTimestamp,
}

/// The conversation orchestration engine.
///
/// For each inbound customer message the engine decides who answers
/// (human operator or bot), produces the automated reply when the bot
/// owns the conversation, and publishes every state change to connected
/// observers. Operator actions (takeover, release, manual send) and
/// channel-status updates flow through the same engine.
///
/// Each conversation is a two-state machine: `BOT_CONTROLLED` (initial)
/// and `HUMAN_CONTROLLED`. Takeover and manual sends move it to human
/// control; an explicit release or an expired takeover window moves it
/// back. Per-conversation processing runs under that conversation's
/// store lock, so concurrent messages on one id serialize while other
/// conversations proceed untouched.
pub struct Engine {
    store: Arc<ConversationStore>,
    dispatcher: AiDispatcher,
    broadcaster: Broadcaster,
    settings: SettingsHandle,
    status: RwLock<ChannelStatus>,
}

impl Engine {
    /// Create an engine over the given collaborators.
    pub fn new(
        store: Arc<ConversationStore>,
        dispatcher: AiDispatcher,
        broadcaster: Broadcaster,
        settings: SettingsHandle,
    ) -> Self {
        Self {
            store,
            dispatcher,
            broadcaster,
            settings,
            status: RwLock::new(ChannelStatus::default()),
        }
    }

    /// Handle one inbound customer message end-to-end.
    ///
    /// Records the message, evaluates the handoff state machine, and
    /// produces the reply: the fixed welcome on first contact, the
    /// distrust rebuttal at most once per conversation, or a generated
    /// reply (degrading to the fallback text on provider failure).
    pub async fn on_customer_message(&self, chat_id: &str, text: &str) -> ReplyOutcome {
        let entry = self.store.get_or_create(chat_id).await;
        let mut conversation = entry.lock().await;

        let inbound = conversation.record(MessageSource::Customer, text);
        self.broadcaster.publish(Event::MessageReceived {
            chat_id: chat_id.to_string(),
            message: inbound,
        });

        let settings = self.settings.read().await.clone();

        // Handoff check first, as its own transition: reclaim happens
        // before any reply decision, within the same call.
        if conversation.human_active {
            match self.check_handoff(&mut conversation, settings.human_takeover_minutes) {
                HandoffCheck::StillHuman => {
                    debug!(chat_id, "human operator active, staying silent");
                    return ReplyOutcome::NoReply(NoReplyReason::HumanActive);
                }
                HandoffCheck::Reclaimed | HandoffCheck::NoTimestamp => {}
            }
        }

        if !settings.auto_reply {
            debug!(chat_id, "auto-reply disabled, staying silent");
            return ReplyOutcome::NoReply(NoReplyReason::AutoReplyDisabled);
        }

        let reply = if !conversation.greeting_sent {
            conversation.greeting_sent = true;
            info!(chat_id, "sending welcome message");
            templates::welcome_message(&settings)
        } else if objection::detects_distrust(text)
            && !conversation.objection_handled(DISTRUST_CATEGORY)
        {
            conversation.record_objection(DISTRUST_CATEGORY);
            info!(chat_id, "answering distrust objection");
            templates::distrust_rebuttal(&settings)
        } else {
            let reply = self
                .dispatcher
                .generate(conversation.dialogue.turns(), text)
                .await;
            conversation.dialogue.push_exchange(text, &reply);
            reply
        };

        let outbound = conversation.record(MessageSource::Bot, &reply);
        self.broadcaster.publish(Event::MessageSent {
            chat_id: chat_id.to_string(),
            message: outbound,
        });

        ReplyOutcome::Reply(reply)
    }

    /// Evaluate the takeover window, reclaiming the conversation for the
    /// bot when it has expired.
    fn check_handoff(&self, conversation: &mut Conversation, timeout_minutes: i64) -> HandoffCheck {
        let Some(last) = conversation.last_human_action else {
            return HandoffCheck::NoTimestamp;
        };

        let elapsed = Utc::now().signed_duration_since(last);
        if elapsed.num_seconds() > timeout_minutes * 60 {
            conversation.human_active = false;
            info!(
                chat_id = %conversation.chat_id,
                elapsed_minutes = elapsed.num_minutes(),
                "takeover window expired, bot reclaims the conversation"
            );
            HandoffCheck::Reclaimed
        } else {
            HandoffCheck::StillHuman
        }
    }

    /// Explicit operator takeover.
    pub async fn takeover(&self, chat_id: &str) {
        let entry = self.store.get_or_create(chat_id).await;
        {
            let mut conversation = entry.lock().await;
            conversation.human_active = true;
            conversation.last_human_action = Some(Utc::now());
        }

        info!(chat_id, "human operator took over");
        self.broadcaster.publish(Event::HumanTakeover {
            chat_id: chat_id.to_string(),
        });
    }

    /// Explicit operator release back to the bot.
    ///
    /// Releasing an already bot-controlled conversation is a no-op
    /// state-wise but still broadcasts.
    pub async fn release(&self, chat_id: &str) {
        let entry = self.store.get_or_create(chat_id).await;
        {
            let mut conversation = entry.lock().await;
            conversation.human_active = false;
        }

        info!(chat_id, "conversation released to the bot");
        self.broadcaster.publish(Event::BotResumed {
            chat_id: chat_id.to_string(),
        });
    }

    /// Operator sends a message manually; implicit takeover.
    pub async fn send_manual(&self, chat_id: &str, text: &str) -> StoredMessage {
        let entry = self.store.get_or_create(chat_id).await;
        let message = {
            let mut conversation = entry.lock().await;
            let message = conversation.record(MessageSource::Human, text);
            conversation.human_active = true;
            conversation.last_human_action = Some(Utc::now());
            message
        };

        info!(chat_id, "operator sent a manual message");
        self.broadcaster.publish(Event::MessageSent {
            chat_id: chat_id.to_string(),
            message: message.clone(),
        });

        message
    }

    /// Snapshots of every conversation.
    pub async fn list_conversations(&self) -> Vec<Conversation> {
        self.store.list().await
    }

    /// Snapshot of one conversation; does not create it.
    pub async fn get_conversation(&self, chat_id: &str) -> Result<Conversation, EngineError> {
        Ok(self.store.snapshot(chat_id).await?)
    }

    /// Delete one conversation.
    pub async fn delete_conversation(&self, chat_id: &str) -> Result<(), EngineError> {
        self.store.remove(chat_id).await?;
        Ok(())
    }

    /// Delete every conversation.
    pub async fn delete_all_conversations(&self) {
        self.store.clear().await;
    }

    /// Apply a channel-status update and broadcast it.
    pub async fn update_status(&self, patch: StatusPatch) -> ChannelStatus {
        let updated = {
            let mut status = self.status.write().await;
            patch.apply(&mut status);
            status.clone()
        };

        self.broadcaster.publish(Event::StatusUpdate {
            status: updated.clone(),
        });
        updated
    }

    /// Current channel status.
    pub async fn status(&self) -> ChannelStatus {
        self.status.read().await.clone()
    }

    /// Broadcast that the runtime configuration changed.
    ///
    /// Called by configuration management after mutating the settings.
    pub fn notify_config_updated(&self) {
        self.broadcaster.publish(Event::ConfigUpdated);
    }

    /// Direct connectivity test against the active provider.
    ///
    /// Surfaces configuration and dispatch errors, unlike the normal
    /// conversation flow.
    pub async fn probe_provider(&self) -> Result<String, ResponderError> {
        self.dispatcher.probe().await
    }

    /// The payload delivered to an observer immediately on connect.
    pub async fn snapshot(&self) -> InitSnapshot {
        let settings = self.settings.read().await.clone();
        let conversations = self.store.list().await;

        InitSnapshot {
            status: self.status().await,
            config: BotConfig {
                auto_reply: settings.auto_reply,
                human_takeover_minutes: settings.human_takeover_minutes,
            },
            ai_configured: settings.ai_configured(),
            provider: settings.provider,
            model: settings.selected_model,
            active_conversations: conversations.len(),
            conversations,
        }
    }

    /// The broadcaster handle, for observer registration.
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// The conversation store.
    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }
}
