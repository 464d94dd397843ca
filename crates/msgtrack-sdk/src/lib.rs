//! MSGTrack SDK - owner-side helpers around the message tracker
//!
//! The core [`Tracker`] is a plain single-owner data structure. This crate
//! adds what a gossip node needs to put it to work:
//!
//! - [`config`] - tracker and relay configuration with builders
//! - [`shared`] - a lock-guarded tracker handle that can be cloned across tasks
//! - [`relay`] - a channel stage that forwards only first sightings
//! - [`error`] - error types
//!
//! # Quick Start
//!
//! ```rust
//! use msgtrack_sdk::{Message, SharedTracker, TrackerConfig};
//!
//! let config = TrackerConfig::builder().capacity(128).build();
//! let tracker = SharedTracker::new(&config).unwrap();
//!
//! let msg = Message::new("block-42", "peer-a", b"payload".to_vec());
//! assert!(tracker.observe(msg.clone()).unwrap());
//! assert!(!tracker.observe(msg).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod relay;
pub mod shared;

// Re-exports for convenience
pub use config::{RelayConfig, RelayConfigBuilder, TrackerConfig, TrackerConfigBuilder};
pub use error::{Result, SdkError};
pub use relay::{DedupRelay, RelayStats};
pub use shared::SharedTracker;

pub use msgtrack_core::{Message, MessageTracker, Tracker, TrackerError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{RelayConfig, TrackerConfig};
    pub use crate::error::SdkError;
    pub use crate::relay::DedupRelay;
    pub use crate::shared::SharedTracker;
    pub use msgtrack_core::{Message, MessageTracker};
}
