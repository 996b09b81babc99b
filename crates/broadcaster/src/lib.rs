//! Real-time event fan-out for the Sora chat agent.
//!
//! Every state change in the orchestration engine is published as a typed
//! [`Event`] and delivered, best effort, to all currently connected
//! observers. A dedicated task owns the observer registry exclusively;
//! producers publish through a channel rather than iterating the registry
//! themselves, so fan-out never races membership changes.
//!
//! Delivery is observer-isolated: a dead observer is removed after the
//! delivery pass and never prevents delivery to the others, and a slow
//! observer drops the event rather than blocking the publisher. Events
//! reach each individual observer in publish order.
//!
//! # Example
//!
//! ```rust
//! use broadcaster::{Broadcaster, Event};
//!
//! # async fn example() {
//! let broadcaster = Broadcaster::spawn();
//! let mut observer = broadcaster.subscribe(16);
//!
//! broadcaster.publish(Event::ConfigUpdated);
//!
//! let event = observer.receiver.recv().await;
//! assert!(matches!(event, Some(Event::ConfigUpdated)));
//! # }
//! ```

mod events;
mod fanout;

pub use events::{ChannelStatus, Event};
pub use fanout::{Broadcaster, ObserverHandle};
