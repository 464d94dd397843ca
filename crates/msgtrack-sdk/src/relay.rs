//! Dedup stage for a gossip pipeline.
//!
//! A [`DedupRelay`] sits between the transport and message handling: it
//! reads incoming messages from a channel, records each in the shared tracker
//! and forwards only the ones seen for the first time.

use crate::config::RelayConfig;
use crate::error::{Result, SdkError};
use crate::shared::SharedTracker;
use msgtrack_core::Message;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

/// Counters reported when a relay finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelayStats {
    /// Messages forwarded on first sighting.
    pub forwarded: u64,
    /// Messages dropped because their ID was already tracked.
    pub duplicates: u64,
    /// Messages the tracker refused as malformed.
    pub rejected: u64,
}

/// Forwards first sightings and drops rebroadcasts.
#[derive(Clone, Debug)]
pub struct DedupRelay {
    tracker: SharedTracker,
    config: RelayConfig,
}

impl DedupRelay {
    pub fn new(tracker: SharedTracker, config: RelayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { tracker, config })
    }

    pub fn tracker(&self) -> &SharedTracker {
        &self.tracker
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Run the relay on a background task.
    ///
    /// Returns the receiving end of the forwarded stream and a handle that
    /// resolves to the final stats once `input` closes.
    pub fn spawn(
        self,
        input: mpsc::Receiver<Message>,
    ) -> (mpsc::Receiver<Arc<Message>>, JoinHandle<Result<RelayStats>>) {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity);
        let handle = tokio::spawn(async move { self.run(input, tx).await });
        (rx, handle)
    }

    /// Drain `input`, forwarding first sightings to `output`.
    ///
    /// Ends with the collected stats when `input` closes, or with
    /// [`SdkError::OutputClosed`] if nobody is listening any more.
    pub async fn run(
        &self,
        mut input: mpsc::Receiver<Message>,
        output: mpsc::Sender<Arc<Message>>,
    ) -> Result<RelayStats> {
        let mut stats = RelayStats::default();
        debug!(tracker = %self.tracker.name(), "relay started");

        while let Some(message) = input.recv().await {
            // Reserve the output slot before recording the message, so an ID
            // is only marked seen once it is certain to be forwarded.
            let permit = output.reserve().await.map_err(|_| {
                warn!(tracker = %self.tracker.name(), id = %message.id, "relay output closed");
                SdkError::OutputClosed
            })?;

            let message = Arc::new(message);
            match self.tracker.observe(Arc::clone(&message)) {
                Ok(true) => {
                    trace!(id = %message.id, peer = %message.peer_id, "forwarding message");
                    permit.send(message);
                    stats.forwarded += 1;
                }
                Ok(false) => stats.duplicates += 1,
                Err(e) => {
                    warn!(peer = %message.peer_id, error = %e, "dropping message");
                    stats.rejected += 1;
                }
            }
        }

        debug!(
            tracker = %self.tracker.name(),
            forwarded = stats.forwarded,
            duplicates = stats.duplicates,
            rejected = stats.rejected,
            "relay stopped"
        );
        Ok(stats)
    }
}
