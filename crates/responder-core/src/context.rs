//! Generation context types shared by all providers.

use serde::{Deserialize, Serialize};

/// The speaker of a dialogue turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// The customer.
    User,
    /// The automated responder.
    Assistant,
}

/// A single dialogue turn: who spoke and what they said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Role of the speaker.
    pub role: TurnRole,
    /// Turn content.
    pub text: String,
}

impl ChatTurn {
    /// Create a customer turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
        }
    }
}

/// The outbound context for one generation request.
///
/// Holds a system instruction and an ordered turn list. The final turn is
/// the customer message currently being answered; providers that keep a
/// session history separate from the current message use
/// [`split_current`](ChatContext::split_current) to pull it apart.
#[derive(Debug, Clone, Default)]
pub struct ChatContext {
    /// System instruction for the provider.
    pub system: String,
    /// Ordered dialogue turns, oldest first. The last turn is the current
    /// customer message.
    pub turns: Vec<ChatTurn>,
}

impl ChatContext {
    /// Create an empty context with the given system instruction.
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            turns: Vec::new(),
        }
    }

    /// Append a turn.
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Split the turn list into prior history and the current message.
    ///
    /// Returns `(history, current)` where `current` is the final turn.
    /// An empty turn list yields an empty history and `None`.
    pub fn split_current(&self) -> (&[ChatTurn], Option<&ChatTurn>) {
        match self.turns.split_last() {
            Some((current, history)) => (history, Some(current)),
            None => (&[], None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_current() {
        let mut context = ChatContext::new("system");
        context.push(ChatTurn::user("first"));
        context.push(ChatTurn::assistant("reply"));
        context.push(ChatTurn::user("second"));

        let (history, current) = context.split_current();
        assert_eq!(history.len(), 2);
        assert_eq!(current.unwrap().text, "second");
        assert_eq!(current.unwrap().role, TurnRole::User);
    }

    #[test]
    fn test_split_current_empty() {
        let context = ChatContext::new("system");
        let (history, current) = context.split_current();
        assert!(history.is_empty());
        assert!(current.is_none());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let turn = ChatTurn::assistant("olá");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "assistant");
    }
}
