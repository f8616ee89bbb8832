//! Status record representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alarm phrase carried by every no-connection record.
pub const NO_CONNECTION_PHRASE: &str = "Warning - No Connection to Server";

/// Alarm level reported by the status server.
///
/// The wire encoding is an integer code; [`AlarmState::from_code`] maps
/// codes 0-4 to the named states and anything else to [`AlarmState::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlarmState {
    /// No alarm condition.
    #[default]
    Ok,
    /// Readings approaching the alarm threshold.
    Warning,
    /// Alarm condition active.
    Alarm,
    /// Fall detected.
    Fall,
    /// The poller could not reach the server.
    NoConnection,
    /// Unrecognized wire code.
    Unknown,
}

impl AlarmState {
    /// Maps a wire code to an alarm state.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Warning,
            2 => Self::Alarm,
            3 => Self::Fall,
            4 => Self::NoConnection,
            _ => Self::Unknown,
        }
    }

    /// Returns the state as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Alarm => "alarm",
            Self::Fall => "fall",
            Self::NoConnection => "no-connection",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AlarmState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The status reported by the server for one poll cycle.
///
/// A record is built fresh at the start of each cycle, populated by the
/// fetch and parse steps, then handed immutably to the sink. Failure
/// paths use [`StatusRecord::no_connection`], which is the only way the
/// `server_reachable == false` state is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Whether the status server answered this cycle.
    pub server_reachable: bool,
    /// Whether the wearable device is connected to the server.
    pub device_connected: bool,
    /// Whether the companion app is running on the device.
    pub device_app_running: bool,
    /// Current alarm level.
    pub alarm_state: AlarmState,
    /// Human-readable alarm description.
    pub alarm_phrase: String,
    /// Device battery percentage; zero or negative means unknown.
    pub battery_percent: i32,
    /// Whether the server has loaded its configuration. Inferred from a
    /// positive battery reading.
    pub has_settings: bool,
    /// When this record was observed (UTC).
    pub observed_at: DateTime<Utc>,
}

impl StatusRecord {
    /// Creates the fixed substitute record for a cycle whose fetch or
    /// parse failed.
    ///
    /// The returned record is the sentinel the rest of the system relies
    /// on: unreachable server, disconnected device, `NoConnection` alarm
    /// state, and the [`NO_CONNECTION_PHRASE`] alarm phrase.
    #[must_use]
    pub fn no_connection(observed_at: DateTime<Utc>) -> Self {
        Self {
            server_reachable: false,
            device_connected: false,
            device_app_running: false,
            alarm_state: AlarmState::NoConnection,
            alarm_phrase: NO_CONNECTION_PHRASE.to_string(),
            battery_percent: 0,
            has_settings: false,
            observed_at,
        }
    }

    /// Returns true if the battery reading is usable.
    #[must_use]
    pub const fn battery_known(&self) -> bool {
        self.battery_percent > 0
    }
}

impl std::fmt::Display for StatusRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.server_reachable {
            write!(
                f,
                "{} ({}) battery={}% device={} app={}",
                self.alarm_state,
                self.alarm_phrase,
                self.battery_percent,
                self.device_connected,
                self.device_app_running
            )
        } else {
            write!(f, "{} ({})", self.alarm_state, self.alarm_phrase)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_state_from_code() {
        assert_eq!(AlarmState::from_code(0), AlarmState::Ok);
        assert_eq!(AlarmState::from_code(1), AlarmState::Warning);
        assert_eq!(AlarmState::from_code(2), AlarmState::Alarm);
        assert_eq!(AlarmState::from_code(3), AlarmState::Fall);
        assert_eq!(AlarmState::from_code(4), AlarmState::NoConnection);
        assert_eq!(AlarmState::from_code(99), AlarmState::Unknown);
        assert_eq!(AlarmState::from_code(-1), AlarmState::Unknown);
    }

    #[test]
    fn test_no_connection_invariant() {
        let record = StatusRecord::no_connection(Utc::now());

        assert!(!record.server_reachable);
        assert!(!record.device_connected);
        assert!(!record.device_app_running);
        assert_eq!(record.alarm_state, AlarmState::NoConnection);
        assert_eq!(record.alarm_phrase, NO_CONNECTION_PHRASE);
        assert!(!record.has_settings);
        assert!(!record.battery_known());
    }

    #[test]
    fn test_record_display() {
        let mut record = StatusRecord::no_connection(Utc::now());
        assert!(record.to_string().contains("no-connection"));

        record.server_reachable = true;
        record.battery_percent = 80;
        assert!(record.to_string().contains("battery=80%"));
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = StatusRecord::no_connection(Utc::now());
        let json = serde_json::to_string(&record).unwrap();
        let back: StatusRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
