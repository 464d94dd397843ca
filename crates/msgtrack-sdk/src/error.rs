//! Error types for the MSGTrack SDK.

use msgtrack_core::TrackerError;
use thiserror::Error;

/// Error type for SDK operations.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Relay output closed")]
    OutputClosed,
}

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, SdkError>;
