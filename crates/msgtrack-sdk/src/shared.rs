//! Lock-guarded tracker handle for use across threads and tasks.

use crate::config::TrackerConfig;
use crate::error::Result;
use msgtrack_core::{Message, MessageTracker, Tracker};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

/// A cloneable handle to a tracker behind a read-write lock.
///
/// Each call holds the lock for its whole duration, so the list and index
/// inside the tracker are never observed half-updated. Mutations take the
/// write lock; lookups and snapshots share the read lock.
#[derive(Clone, Debug)]
pub struct SharedTracker {
    name: Arc<str>,
    inner: Arc<RwLock<Tracker>>,
}

impl SharedTracker {
    /// Create a tracker from configuration.
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        config.validate()?;
        let tracker = Tracker::new(config.capacity)?;
        debug!(name = %config.name, capacity = config.capacity, "tracker created");
        Ok(Self::from_tracker(config.name.as_str(), tracker))
    }

    /// Wrap an existing tracker.
    pub fn from_tracker(name: &str, tracker: Tracker) -> Self {
        Self {
            name: Arc::from(name),
            inner: Arc::new(RwLock::new(tracker)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a message. Duplicates are accepted and ignored.
    pub fn add(&self, message: impl Into<Arc<Message>>) -> Result<()> {
        self.observe(message).map(|_| ())
    }

    /// Record a message and report whether this is its first sighting.
    ///
    /// Returns `Ok(false)` for an ID that is already tracked, which a relay
    /// uses to decide not to rebroadcast.
    pub fn observe(&self, message: impl Into<Arc<Message>>) -> Result<bool> {
        let message = message.into();
        let mut tracker = self.inner.write();

        if tracker.contains(&message.id) {
            trace!(tracker = %self.name, id = %message.id, peer = %message.peer_id, "duplicate message");
            return Ok(false);
        }

        if tracker.is_full() && message.is_well_formed() {
            if let Some(oldest) = tracker.oldest() {
                debug!(tracker = %self.name, evicted = %oldest.id, "evicting oldest message");
            }
        }

        tracker.add(message)?;
        Ok(true)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.inner.write().delete(id)?;
        trace!(tracker = %self.name, id, "message deleted");
        Ok(())
    }

    pub fn message(&self, id: &str) -> Result<Arc<Message>> {
        Ok(self.inner.read().message(id)?)
    }

    /// Snapshot of all tracked messages, oldest first.
    pub fn messages(&self) -> Vec<Arc<Message>> {
        self.inner.read().messages()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }
}
