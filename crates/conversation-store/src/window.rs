//! Bounded dialogue window used as LLM context.
//!
//! Adapted turn tracking with pair-atomic trimming: exchanges are always
//! appended as a user+assistant pair, and eviction removes the oldest
//! complete pair, so the window never holds an orphaned role.

use responder_core::ChatTurn;
use serde::{Deserialize, Serialize};

/// Maximum number of entries (turns) the window keeps.
///
/// 20 entries is 10 complete exchanges.
pub const MAX_WINDOW_ENTRIES: usize = 20;

/// A bounded, ordered sequence of prior dialogue turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogueWindow {
    turns: Vec<ChatTurn>,
}

impl DialogueWindow {
    /// Create an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a customer/assistant exchange as an atomic pair, evicting
    /// the oldest pair first when the window is full.
    pub fn push_exchange(&mut self, user_text: &str, assistant_text: &str) {
        self.turns.push(ChatTurn::user(user_text));
        self.turns.push(ChatTurn::assistant(assistant_text));

        if self.turns.len() > MAX_WINDOW_ENTRIES {
            let to_remove = self.turns.len() - MAX_WINDOW_ENTRIES;
            self.turns.drain(0..to_remove);
        }
    }

    /// Get the newest `count` turns, oldest first.
    pub fn recent(&self, count: usize) -> &[ChatTurn] {
        let start = self.turns.len().saturating_sub(count);
        &self.turns[start..]
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Number of turns currently held.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use responder_core::TurnRole;

    #[test]
    fn test_push_exchange_appends_pair() {
        let mut window = DialogueWindow::new();
        window.push_exchange("oi", "olá!");

        assert_eq!(window.len(), 2);
        assert_eq!(window.turns()[0].role, TurnRole::User);
        assert_eq!(window.turns()[0].text, "oi");
        assert_eq!(window.turns()[1].role, TurnRole::Assistant);
        assert_eq!(window.turns()[1].text, "olá!");
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut window = DialogueWindow::new();
        for i in 0..15 {
            window.push_exchange(&format!("pergunta {i}"), &format!("resposta {i}"));
        }

        assert_eq!(window.len(), MAX_WINDOW_ENTRIES);
    }

    #[test]
    fn test_evicts_oldest_pair_first() {
        let mut window = DialogueWindow::new();
        for i in 0..11 {
            window.push_exchange(&format!("pergunta {i}"), &format!("resposta {i}"));
        }

        // The first exchange is gone, the window still starts on a user turn.
        assert_eq!(window.turns()[0].role, TurnRole::User);
        assert_eq!(window.turns()[0].text, "pergunta 1");
        assert_eq!(window.turns()[1].text, "resposta 1");
        assert_eq!(window.turns()[19].text, "resposta 10");
    }

    #[test]
    fn test_recent_returns_newest() {
        let mut window = DialogueWindow::new();
        for i in 0..8 {
            window.push_exchange(&format!("pergunta {i}"), &format!("resposta {i}"));
        }

        let recent = window.recent(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].text, "pergunta 3");
        assert_eq!(recent[9].text, "resposta 7");
    }

    #[test]
    fn test_recent_with_short_window() {
        let mut window = DialogueWindow::new();
        window.push_exchange("oi", "olá!");

        let recent = window.recent(10);
        assert_eq!(recent.len(), 2);
    }
}
