//! JSON status payload parsing.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use vigil_types::{AlarmState, StatusRecord};

/// Errors that can occur while decoding a status payload.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The payload is not a decodable JSON object.
    #[error("Malformed status payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The status document as it appears on the wire.
///
/// Every field is defaulted: the server omits fields it has no value
/// for, and unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStatus {
    #[serde(rename = "batteryPc")]
    battery_pc: i32,
    #[serde(rename = "alarmState")]
    alarm_state: i64,
    #[serde(rename = "alarmPhrase")]
    alarm_phrase: String,
    #[serde(rename = "deviceConnected")]
    device_connected: bool,
    #[serde(rename = "deviceAppRunning")]
    device_app_running: bool,
}

/// Decodes a status payload into a [`StatusRecord`].
///
/// On success the record has `server_reachable` set, `observed_at` set
/// to the supplied timestamp, and `has_settings` computed from the
/// battery reading (a positive percentage is taken as proof the server
/// has loaded its configuration).
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] if the bytes do not decode as a
/// JSON object. Missing fields are not an error; they keep their
/// zero value.
pub fn parse_status(
    bytes: &[u8],
    observed_at: DateTime<Utc>,
) -> Result<StatusRecord, ParseError> {
    let raw: RawStatus = serde_json::from_slice(bytes)?;

    Ok(StatusRecord {
        server_reachable: true,
        device_connected: raw.device_connected,
        device_app_running: raw.device_app_running,
        alarm_state: AlarmState::from_code(raw.alarm_state),
        alarm_phrase: raw.alarm_phrase,
        battery_percent: raw.battery_pc,
        has_settings: raw.battery_pc > 0,
        observed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_payload() {
        let payload = br#"{
            "batteryPc": 80,
            "alarmState": 1,
            "alarmPhrase": "WARNING",
            "deviceConnected": true,
            "deviceAppRunning": true
        }"#;

        let now = Utc::now();
        let record = parse_status(payload, now).unwrap();

        assert!(record.server_reachable);
        assert_eq!(record.battery_percent, 80);
        assert!(record.has_settings);
        assert_eq!(record.alarm_state, AlarmState::Warning);
        assert_eq!(record.alarm_phrase, "WARNING");
        assert!(record.device_connected);
        assert!(record.device_app_running);
        assert_eq!(record.observed_at, now);
    }

    #[test]
    fn test_parse_missing_fields_default() {
        let record = parse_status(b"{}", Utc::now()).unwrap();

        assert!(record.server_reachable);
        assert_eq!(record.battery_percent, 0);
        assert!(!record.has_settings);
        assert_eq!(record.alarm_state, AlarmState::Ok);
        assert_eq!(record.alarm_phrase, "");
        assert!(!record.device_connected);
    }

    #[test]
    fn test_parse_negative_battery_means_no_settings() {
        let record = parse_status(br#"{"batteryPc": -1}"#, Utc::now()).unwrap();
        assert_eq!(record.battery_percent, -1);
        assert!(!record.has_settings);
    }

    #[test]
    fn test_parse_unknown_fields_ignored() {
        let payload = br#"{"batteryPc": 55, "specPower": 1234, "maxVal": 9}"#;
        let record = parse_status(payload, Utc::now()).unwrap();
        assert_eq!(record.battery_percent, 55);
        assert!(record.has_settings);
    }

    #[test]
    fn test_parse_unknown_alarm_code() {
        let record = parse_status(br#"{"alarmState": 42}"#, Utc::now()).unwrap();
        assert_eq!(record.alarm_state, AlarmState::Unknown);
    }

    #[test]
    fn test_parse_malformed_payload() {
        assert!(parse_status(b"not json at all", Utc::now()).is_err());
        assert!(parse_status(b"", Utc::now()).is_err());
        // A truncated object, as produced by the body cap.
        assert!(parse_status(br#"{"batteryPc": 80, "alarmPh"#, Utc::now()).is_err());
    }
}
