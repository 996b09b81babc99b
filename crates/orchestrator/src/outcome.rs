//! The engine's answer to an inbound customer message.

use serde::Serialize;

/// Why no automated reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoReplyReason {
    /// A human operator currently owns the conversation.
    HumanActive,
    /// Auto-reply is globally disabled.
    AutoReplyDisabled,
}

/// Outcome of handling one inbound customer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The bot produced this reply.
    Reply(String),
    /// No reply was produced, for the given reason.
    NoReply(NoReplyReason),
}

impl ReplyOutcome {
    /// The reply text, if one was produced.
    pub fn reply(&self) -> Option<&str> {
        match self {
            ReplyOutcome::Reply(text) => Some(text),
            ReplyOutcome::NoReply(_) => None,
        }
    }

    /// The no-reply reason, if the bot stayed silent.
    pub fn reason(&self) -> Option<NoReplyReason> {
        match self {
            ReplyOutcome::Reply(_) => None,
            ReplyOutcome::NoReply(reason) => Some(*reason),
        }
    }
}
