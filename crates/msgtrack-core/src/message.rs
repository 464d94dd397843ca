//! The message record exchanged with the propagation layer.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A gossiped message.
///
/// Only `id` takes part in deduplication. `peer_id` records who handed us the
/// message and `data` is the opaque payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub peer_id: String,
    pub data: Vec<u8>,
}

impl Message {
    pub fn new(id: impl Into<String>, peer_id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            peer_id: peer_id.into(),
            data,
        }
    }

    /// Create a message with a freshly generated ULID identifier.
    pub fn with_fresh_id(peer_id: impl Into<String>, data: Vec<u8>) -> Self {
        Self::new(Ulid::new().to_string(), peer_id, data)
    }

    /// Whether the message can be tracked at all.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
    }
}
