//! MSGTrack Core - bounded FIFO tracker for recently seen messages
//!
//! A gossip layer keeps a short memory of the messages it has already
//! processed so rebroadcasts can be dropped and "have you seen X?" can be
//! answered in constant time. This crate provides that memory:
//!
//! - [`Message`] - the record shape shared with transport and encoding layers
//! - [`Tracker`] - fixed-capacity, insertion-ordered, ID-deduplicated store
//! - [`MessageTracker`] - the tracker operations as a trait
//!
//! # Example
//!
//! ```rust
//! use msgtrack_core::{Message, MessageTracker, Tracker};
//!
//! let mut tracker = Tracker::new(2).unwrap();
//! tracker.add(Message::new("m0", "peer-a", vec![0])).unwrap();
//! tracker.add(Message::new("m1", "peer-a", vec![1])).unwrap();
//! tracker.add(Message::new("m2", "peer-b", vec![2])).unwrap();
//!
//! // The oldest entry was evicted to make room.
//! let ids: Vec<_> = tracker.messages().iter().map(|m| m.id.clone()).collect();
//! assert_eq!(ids, vec!["m1", "m2"]);
//! ```
//!
//! The tracker is not synchronized. Owners sharing it across threads wrap it
//! in their own lock.

pub mod error;
pub mod message;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use message::Message;
pub use tracker::{Iter, MessageTracker, Tracker};
