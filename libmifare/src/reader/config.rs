// libmifare/src/reader/config.rs

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::timeout::{default_discovery_timeout, default_poll_interval};

/// Tunables for a reader session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReaderConfig {
    /// Sleep between ready-status polls during discovery
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub poll_interval: Duration,
    /// Give up waiting for a target after this long
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub discovery_timeout: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            poll_interval: default_poll_interval(),
            discovery_timeout: default_discovery_timeout(),
        }
    }
}

impl ReaderConfig {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout = timeout;
        self
    }
}

#[cfg(feature = "serde")]
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}
