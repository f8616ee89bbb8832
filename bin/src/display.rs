//! Record formatting for terminal output.

use anyhow::Result;
use vigil_types::StatusRecord;

/// Formats a record as a human-readable line or a JSON object.
pub(crate) fn format_record(record: &StatusRecord, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(record)?)
    } else {
        Ok(format!(
            "{}  {record}",
            record.observed_at.format("%Y-%m-%d %H:%M:%S")
        ))
    }
}
