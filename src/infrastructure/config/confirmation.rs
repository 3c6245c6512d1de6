//! Receipt polling settings.

use std::time::Duration;

use serde::Deserialize;

/// How often to poll for receipts and how long to wait.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationConfig {
    /// Delay between receipt polls in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Give up after this many seconds. Unset waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

const fn default_poll_interval_ms() -> u64 {
    1_000
}

impl ConfirmationConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            timeout_secs: None,
        }
    }
}
