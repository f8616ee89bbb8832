//! Polling configuration.

use std::time::Duration;
use thiserror::Error;

/// Default status server address.
pub const DEFAULT_SERVER_ADDRESS: &str = "192.168.1.175";

/// Default interval between poll cycles, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Non-fatal problems found while merging a configuration update.
///
/// A warning means the offending value was ignored and the previous
/// valid value kept; the poller keeps running either way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The poll interval could not be parsed as a number.
    #[error("Invalid poll interval {raw:?}, keeping {kept} ms")]
    InvalidInterval {
        /// The raw value that failed to parse.
        raw: String,
        /// The interval that remains in effect, in milliseconds.
        kept: u64,
    },

    /// The poll interval parsed but is zero.
    #[error("Poll interval must be positive, keeping {kept} ms")]
    ZeroInterval {
        /// The interval that remains in effect, in milliseconds.
        kept: u64,
    },
}

/// Configuration snapshot for the polling loop.
///
/// A snapshot is captured once at the start of each poll cycle, so
/// concurrent updates never affect a cycle already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Status server address. A bare host polls port 8080; a
    /// `host:port` value is used verbatim.
    pub server_address: String,
    /// Interval between poll cycles, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl PollConfig {
    /// Creates a configuration with the given address and interval.
    #[must_use]
    pub const fn new(server_address: String, poll_interval_ms: u64) -> Self {
        Self {
            server_address,
            poll_interval_ms,
        }
    }

    /// Returns the poll cadence as a [`Duration`].
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Merges raw string updates into a new configuration.
    ///
    /// Settings stores hand values over as strings, so the interval has
    /// to be parsed here. A malformed or zero interval keeps the
    /// previous value and is reported as a [`ConfigWarning`] instead of
    /// an error; an absent field keeps the previous value silently.
    #[must_use]
    pub fn merged_with(
        &self,
        server_address: Option<&str>,
        poll_interval_ms: Option<&str>,
    ) -> (Self, Option<ConfigWarning>) {
        let mut merged = self.clone();
        let mut warning = None;

        if let Some(address) = server_address {
            merged.server_address = address.to_string();
        }

        if let Some(raw) = poll_interval_ms {
            match raw.trim().parse::<u64>() {
                Ok(0) => {
                    warning = Some(ConfigWarning::ZeroInterval {
                        kept: self.poll_interval_ms,
                    });
                }
                Ok(ms) => merged.poll_interval_ms = ms,
                Err(_) => {
                    warning = Some(ConfigWarning::InvalidInterval {
                        raw: raw.to_string(),
                        kept: self.poll_interval_ms,
                    });
                }
            }
        }

        (merged, warning)
    }
}
