//! Fixed-capacity FIFO tracker of recently seen messages.
//!
//! Entries are kept in an [`LruCache`] keyed by message ID. The tracker only
//! ever inserts with `push` and reads with `peek`/`contains`, which never
//! promote an entry, so recency order in the cache is exactly insertion
//! order: the least recently used entry is the oldest message, and that is
//! the one evicted when the tracker is full.
//!
//! ```text
//! cache (MRU -> LRU):  m5  m4  m3  m1
//! messages() (FIFO):   m1  m3  m4  m5
//! ```

use crate::error::{Result, TrackerError};
use crate::message::Message;
use lru::LruCache;
use std::sync::Arc;

/// Operations shared by message trackers.
///
/// Messages are kept first-in-first-out and a message whose ID is already
/// tracked is never stored twice.
pub trait MessageTracker {
    /// Add a shared message, evicting the oldest one if the tracker is full.
    ///
    /// Adding an ID that is already tracked succeeds without touching the
    /// stored entry.
    fn add_arc(&mut self, message: Arc<Message>) -> Result<()>;

    /// Add a message by value or as an `Arc`. See [`MessageTracker::add_arc`].
    fn add<M: Into<Arc<Message>>>(&mut self, message: M) -> Result<()>
    where
        Self: Sized,
    {
        self.add_arc(message.into())
    }

    /// Remove the message with the given ID.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Look up a message by ID. The message stays tracked.
    fn message(&self, id: &str) -> Result<Arc<Message>>;

    /// All tracked messages, oldest first.
    fn messages(&self) -> Vec<Arc<Message>>;

    /// Number of tracked messages.
    fn len(&self) -> usize;

    /// Maximum number of tracked messages.
    fn capacity(&self) -> usize;

    /// Whether a message with this ID is tracked.
    fn contains(&self, id: &str) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// Bounded, insertion-ordered, ID-deduplicated message store.
#[derive(Debug)]
pub struct Tracker {
    capacity: usize,
    cache: LruCache<String, Arc<Message>>,
}

impl Tracker {
    /// Create an empty tracker holding at most `capacity` messages.
    ///
    /// Fails with [`TrackerError::InvalidLength`] when the capacity is zero,
    /// negative or does not fit in `usize`.
    pub fn new<C: TryInto<usize>>(capacity: C) -> Result<Self> {
        let capacity = capacity
            .try_into()
            .ok()
            .filter(|&c| c > 0)
            .ok_or(TrackerError::InvalidLength)?;

        // The cache itself is unbounded so a huge capacity does not reserve
        // its whole table up front; `add_arc` enforces the bound.
        Ok(Self {
            capacity,
            cache: LruCache::unbounded(),
        })
    }

    /// Iterate over tracked messages, oldest first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.cache.iter().rev(),
        }
    }

    /// The oldest tracked message, next in line for eviction.
    pub fn oldest(&self) -> Option<&Arc<Message>> {
        self.cache.peek_lru().map(|(_, message)| message)
    }

    /// The most recently added message.
    pub fn newest(&self) -> Option<&Arc<Message>> {
        self.cache.iter().next().map(|(_, message)| message)
    }
}

impl MessageTracker for Tracker {
    fn add_arc(&mut self, message: Arc<Message>) -> Result<()> {
        if !message.is_well_formed() {
            return Err(TrackerError::InvalidMessage);
        }

        // First sighting wins; a repeat does not move or replace the entry.
        if self.cache.contains(message.id.as_str()) {
            return Ok(());
        }

        if self.cache.len() == self.capacity {
            self.cache.pop_lru();
        }

        self.cache.push(message.id.clone(), message);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.cache
            .pop(id)
            .map(|_| ())
            .ok_or(TrackerError::MessageNotFound)
    }

    fn message(&self, id: &str) -> Result<Arc<Message>> {
        self.cache
            .peek(id)
            .map(Arc::clone)
            .ok_or(TrackerError::MessageNotFound)
    }

    fn messages(&self) -> Vec<Arc<Message>> {
        self.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.cache.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn contains(&self, id: &str) -> bool {
        self.cache.contains(id)
    }
}

/// Borrowing iterator over a [`Tracker`] in FIFO order.
pub struct Iter<'a> {
    inner: std::iter::Rev<lru::Iter<'a, String, Arc<Message>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Arc<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, message)| message)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Tracker {
    type Item = &'a Arc<Message>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
