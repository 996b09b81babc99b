//! Observer registry task and the publishing handle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::events::Event;

/// Commands understood by the registry task.
enum Command {
    Publish(Event),
    Subscribe {
        id: u64,
        sender: mpsc::Sender<Event>,
    },
    Unsubscribe(u64),
    Count(oneshot::Sender<usize>),
}

/// A connected observer: its registry id and the event receiver.
pub struct ObserverHandle {
    /// Registry id, used to unsubscribe explicitly. Dropping the receiver
    /// also unsubscribes implicitly on the next delivery pass.
    pub id: u64,
    /// Receiving end of this observer's event queue.
    pub receiver: mpsc::Receiver<Event>,
}

/// Handle for publishing events and managing observer membership.
///
/// Cloneable; all clones feed the same registry task. The task ends when
/// the last handle is dropped.
#[derive(Clone)]
pub struct Broadcaster {
    tx: mpsc::UnboundedSender<Command>,
    next_id: Arc<AtomicU64>,
}

impl Broadcaster {
    /// Spawn the registry task and return a publishing handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_registry(rx));
        Self {
            tx,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Publish an event to every connected observer.
    ///
    /// Fire and forget: delivery failures are handled per observer inside
    /// the registry task and never surface here.
    pub fn publish(&self, event: Event) {
        let _ = self.tx.send(Command::Publish(event));
    }

    /// Register a new observer with the given queue capacity.
    ///
    /// Events published after this call are delivered in publish order.
    /// If the observer's queue is full when an event arrives, that event
    /// is dropped for this observer only.
    pub fn subscribe(&self, capacity: usize) -> ObserverHandle {
        let (sender, receiver) = mpsc::channel(capacity);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let _ = self.tx.send(Command::Subscribe { id, sender });
        ObserverHandle { id, receiver }
    }

    /// Remove an observer from the registry.
    pub fn unsubscribe(&self, id: u64) {
        let _ = self.tx.send(Command::Unsubscribe(id));
    }

    /// Number of currently registered observers.
    pub async fn observer_count(&self) -> usize {
        let (reply, response) = oneshot::channel();
        if self.tx.send(Command::Count(reply)).is_err() {
            return 0;
        }
        response.await.unwrap_or(0)
    }
}

/// The registry task: exclusive owner of observer membership.
async fn run_registry(mut rx: mpsc::UnboundedReceiver<Command>) {
    let mut observers: IndexMap<u64, mpsc::Sender<Event>> = IndexMap::new();

    while let Some(command) = rx.recv().await {
        match command {
            Command::Publish(event) => {
                let mut closed = Vec::new();

                for (id, sender) in &observers {
                    match sender.try_send(event.clone()) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            warn!(observer = *id, "observer queue full, dropping event");
                        }
                        Err(TrySendError::Closed(_)) => {
                            closed.push(*id);
                        }
                    }
                }

                // Remove dead observers after the delivery pass.
                for id in closed {
                    observers.shift_remove(&id);
                    debug!(observer = id, "removed closed observer");
                }
            }

            Command::Subscribe { id, sender } => {
                observers.insert(id, sender);
                debug!(observer = id, total = observers.len(), "observer connected");
            }

            Command::Unsubscribe(id) => {
                observers.shift_remove(&id);
                debug!(observer = id, total = observers.len(), "observer disconnected");
            }

            Command::Count(reply) => {
                let _ = reply.send(observers.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_event(chat_id: &str) -> Event {
        Event::HumanTakeover {
            chat_id: chat_id.to_string(),
        }
    }

    fn event_chat_id(event: &Event) -> &str {
        match event {
            Event::HumanTakeover { chat_id } => chat_id,
            _ => panic!("unexpected event"),
        }
    }

    #[tokio::test]
    async fn test_delivers_to_all_observers() {
        let broadcaster = Broadcaster::spawn();
        let mut first = broadcaster.subscribe(16);
        let mut second = broadcaster.subscribe(16);

        broadcaster.publish(chat_event("a@c.us"));

        let event = first.receiver.recv().await.unwrap();
        assert_eq!(event_chat_id(&event), "a@c.us");
        let event = second.receiver.recv().await.unwrap();
        assert_eq!(event_chat_id(&event), "a@c.us");
    }

    #[tokio::test]
    async fn test_per_observer_ordering() {
        let broadcaster = Broadcaster::spawn();
        let mut observer = broadcaster.subscribe(16);

        broadcaster.publish(chat_event("1"));
        broadcaster.publish(chat_event("2"));
        broadcaster.publish(chat_event("3"));

        for expected in ["1", "2", "3"] {
            let event = observer.receiver.recv().await.unwrap();
            assert_eq!(event_chat_id(&event), expected);
        }
    }

    #[tokio::test]
    async fn test_closed_observer_removed_without_breaking_others() {
        let broadcaster = Broadcaster::spawn();
        let dead = broadcaster.subscribe(16);
        let mut alive = broadcaster.subscribe(16);

        drop(dead.receiver);

        // First publish hits the closed queue and triggers removal.
        broadcaster.publish(chat_event("x"));
        let event = alive.receiver.recv().await.unwrap();
        assert_eq!(event_chat_id(&event), "x");

        assert_eq!(broadcaster.observer_count().await, 1);
    }

    #[tokio::test]
    async fn test_unsubscribe() {
        let broadcaster = Broadcaster::spawn();
        let observer = broadcaster.subscribe(16);
        assert_eq!(broadcaster.observer_count().await, 1);

        broadcaster.unsubscribe(observer.id);
        assert_eq!(broadcaster.observer_count().await, 0);
    }

    #[tokio::test]
    async fn test_slow_observer_drops_event_only_for_itself() {
        let broadcaster = Broadcaster::spawn();
        let mut slow = broadcaster.subscribe(1);
        let mut fast = broadcaster.subscribe(16);

        broadcaster.publish(chat_event("1"));
        broadcaster.publish(chat_event("2"));

        // The fast observer sees both events.
        assert_eq!(event_chat_id(&fast.receiver.recv().await.unwrap()), "1");
        assert_eq!(event_chat_id(&fast.receiver.recv().await.unwrap()), "2");

        // The slow observer's queue held one event; the second was dropped.
        assert_eq!(event_chat_id(&slow.receiver.recv().await.unwrap()), "1");
        assert_eq!(broadcaster.observer_count().await, 2);
        assert!(slow.receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_publish_without_observers_is_noop() {
        let broadcaster = Broadcaster::spawn();
        broadcaster.publish(chat_event("nobody"));
        assert_eq!(broadcaster.observer_count().await, 0);
    }
}
