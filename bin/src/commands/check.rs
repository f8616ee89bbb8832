//! The `check` command: one-shot status fetch.

use anyhow::Result;
use chrono::Utc;
use vigil_fetch::url::status_url;
use vigil_fetch::{StatusClient, parse_status};
use vigil_types::StatusRecord;

use crate::display;

/// Fetches the status once and prints the record.
///
/// Exits with a non-zero code when the server is unreachable or the
/// payload is malformed, mirroring what the poller would deliver.
pub(crate) async fn check(server: &str, json: bool) -> Result<()> {
    let client = StatusClient::with_defaults()?;
    let url = status_url(server);

    let record = match client.fetch(&url).await {
        Ok(bytes) => match parse_status(&bytes, Utc::now()) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, url, "Malformed status payload");
                StatusRecord::no_connection(Utc::now())
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, url, "Status fetch failed");
            StatusRecord::no_connection(Utc::now())
        }
    };

    println!("{}", display::format_record(&record, json)?);

    if !record.server_reachable {
        std::process::exit(1);
    }
    Ok(())
}
