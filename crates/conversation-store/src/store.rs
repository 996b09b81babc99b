//! The conversation registry.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::{Mutex, RwLock};

use crate::conversation::Conversation;
use crate::error::StoreError;

/// In-memory conversation registry keyed by conversation id.
///
/// Each conversation sits behind its own `tokio::Mutex`, so
/// read-modify-write sequences against one conversation are atomic while
/// operations on different ids proceed independently. The outer registry
/// lock is held only for lookup, insert, and removal.
///
/// Conversations are created lazily on first reference and live for the
/// process lifetime unless explicitly deleted.
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: RwLock<IndexMap<String, Arc<Mutex<Conversation>>>>,
}

impl ConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the conversation for an id, creating it with defaults on first
    /// reference.
    pub async fn get_or_create(&self, chat_id: &str) -> Arc<Mutex<Conversation>> {
        // Fast path: already registered.
        {
            let conversations = self.conversations.read().await;
            if let Some(entry) = conversations.get(chat_id) {
                return entry.clone();
            }
        }

        let mut conversations = self.conversations.write().await;
        conversations
            .entry(chat_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Conversation::new(chat_id))))
            .clone()
    }

    /// Get the conversation for an id without creating it.
    pub async fn get(&self, chat_id: &str) -> Result<Arc<Mutex<Conversation>>, StoreError> {
        let conversations = self.conversations.read().await;
        conversations
            .get(chat_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                chat_id: chat_id.to_string(),
            })
    }

    /// Get a cloned snapshot of one conversation's state.
    pub async fn snapshot(&self, chat_id: &str) -> Result<Conversation, StoreError> {
        let entry = self.get(chat_id).await?;
        let conversation = entry.lock().await;
        Ok(conversation.clone())
    }

    /// Get cloned snapshots of every conversation, in creation order.
    pub async fn list(&self) -> Vec<Conversation> {
        let entries: Vec<Arc<Mutex<Conversation>>> = {
            let conversations = self.conversations.read().await;
            conversations.values().cloned().collect()
        };

        let mut snapshots = Vec::with_capacity(entries.len());
        for entry in entries {
            snapshots.push(entry.lock().await.clone());
        }
        snapshots
    }

    /// Delete one conversation.
    pub async fn remove(&self, chat_id: &str) -> Result<(), StoreError> {
        let mut conversations = self.conversations.write().await;
        conversations
            .shift_remove(chat_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                chat_id: chat_id.to_string(),
            })
    }

    /// Delete every conversation.
    pub async fn clear(&self) {
        let mut conversations = self.conversations.write().await;
        conversations.clear();
    }

    /// Number of registered conversations.
    pub async fn len(&self) -> usize {
        let conversations = self.conversations.read().await;
        conversations.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageSource;

    #[tokio::test]
    async fn test_get_or_create_is_lazy() {
        let store = ConversationStore::new();
        assert!(store.is_empty().await);

        let entry = store.get_or_create("5511999@c.us").await;
        assert_eq!(store.len().await, 1);

        let conversation = entry.lock().await;
        assert_eq!(conversation.chat_id, "5511999@c.us");
        assert!(!conversation.human_active);
    }

    #[tokio::test]
    async fn test_get_or_create_returns_same_entry() {
        let store = ConversationStore::new();

        let first = store.get_or_create("5511999@c.us").await;
        first.lock().await.record(MessageSource::Customer, "oi");

        let second = store.get_or_create("5511999@c.us").await;
        assert_eq!(second.lock().await.messages.len(), 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_does_not_create() {
        let store = ConversationStore::new();

        let result = store.get("missing@c.us").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_snapshots_in_creation_order() {
        let store = ConversationStore::new();
        store.get_or_create("a@c.us").await;
        store.get_or_create("b@c.us").await;

        let snapshots = store.list().await;
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].chat_id, "a@c.us");
        assert_eq!(snapshots[1].chat_id, "b@c.us");
    }

    #[tokio::test]
    async fn test_remove() {
        let store = ConversationStore::new();
        store.get_or_create("a@c.us").await;

        store.remove("a@c.us").await.unwrap();
        assert!(store.is_empty().await);

        let result = store.remove("a@c.us").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_clear() {
        let store = ConversationStore::new();
        store.get_or_create("a@c.us").await;
        store.get_or_create("b@c.us").await;

        store.clear().await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_separate_conversations_do_not_share_state() {
        let store = ConversationStore::new();

        let a = store.get_or_create("a@c.us").await;
        a.lock().await.record(MessageSource::Customer, "oi");

        let b = store.get_or_create("b@c.us").await;
        assert!(b.lock().await.messages.is_empty());
    }
}
