//! Error types for tracker operations.

use thiserror::Error;

/// Errors returned by [`Tracker`](crate::Tracker) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid tracker length: capacity must be positive")]
    InvalidLength,

    #[error("invalid message: identifier must not be empty")]
    InvalidMessage,

    #[error("message not found")]
    MessageNotFound,
}

pub type Result<T> = std::result::Result<T, TrackerError>;
