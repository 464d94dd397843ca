//! Configuration for trackers and relays.

use crate::error::{Result, SdkError};
use msgtrack_core::TrackerError;
use serde::{Deserialize, Serialize};

/// Configuration for a message tracker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Label used in log output.
    pub name: String,
    /// Maximum number of messages remembered.
    pub capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            name: "tracker".to_string(),
            capacity: 1000,
        }
    }
}

impl TrackerConfig {
    pub fn builder() -> TrackerConfigBuilder {
        TrackerConfigBuilder::new()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use msgtrack_sdk::TrackerConfig;
    ///
    /// let config = TrackerConfig::from_json(r#"{ "capacity": 64 }"#).unwrap();
    /// assert_eq!(config.capacity, 64);
    /// assert_eq!(config.name, "tracker");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(TrackerError::InvalidLength.into());
        }
        Ok(())
    }
}

/// Builder for tracker configuration.
pub struct TrackerConfigBuilder {
    config: TrackerConfig,
}

impl TrackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn build(self) -> TrackerConfig {
        self.config
    }
}

impl Default for TrackerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a [`DedupRelay`](crate::relay::DedupRelay).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Bound of the channel carrying forwarded messages.
    pub channel_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

impl RelayConfig {
    pub fn builder() -> RelayConfigBuilder {
        RelayConfigBuilder::new()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel_capacity == 0 {
            return Err(SdkError::Config(
                "channel_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for relay configuration.
pub struct RelayConfigBuilder {
    config: RelayConfig,
}

impl RelayConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RelayConfig::default(),
        }
    }

    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.config.channel_capacity = capacity;
        self
    }

    pub fn build(self) -> RelayConfig {
        self.config
    }
}

impl Default for RelayConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
