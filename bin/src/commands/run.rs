//! The `run` command: continuous polling.

use std::sync::Arc;

use anyhow::Result;
use vigil_poll::{ChannelSink, DataSource, NetworkSource};
use vigil_types::PollConfig;

use crate::display;

/// Polls the status server until interrupted or `count` records arrive.
pub(crate) async fn run(
    server: &str,
    interval_ms: Option<&str>,
    count: Option<u64>,
    json: bool,
) -> Result<()> {
    let (config, warning) = PollConfig::default().merged_with(Some(server), interval_ms);
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let (sink, mut rx) = ChannelSink::channel();
    let mut source = NetworkSource::new(config, Arc::new(sink))?;
    source.start();

    let mut delivered = 0u64;
    loop {
        tokio::select! {
            record = rx.recv() => {
                let Some(record) = record else { break };
                println!("{}", display::format_record(&record, json)?);
                delivered += 1;
                if count.is_some_and(|n| delivered >= n) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping poller");
                break;
            }
        }
    }

    source.stop();
    Ok(())
}
