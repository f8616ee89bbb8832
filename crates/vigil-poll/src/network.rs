//! Periodic HTTP polling source.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Semaphore, watch};
use tokio::task::JoinHandle;
use vigil_fetch::url::status_url;
use vigil_fetch::{StatusClient, parse_status};
use vigil_types::{PollConfig, StatusRecord};

use crate::sink::RecordSink;
use crate::source::DataSource;

/// Maximum number of poll cycles allowed in flight at once.
///
/// Covers the worst case of the 5 s fetch timeout against the 2 s
/// default cadence; ticks beyond the bound are skipped.
pub const MAX_IN_FLIGHT_CYCLES: usize = 4;

/// Polls the status server on a fixed cadence and delivers one record
/// per cycle to the sink.
///
/// One scheduler task owns the cadence; every tick spawns a worker task
/// for the fetch, parse, and delivery, so the scheduler never blocks on
/// I/O. The first cycle fires immediately on [`start`], subsequent
/// cycles after each `poll_interval_ms` sleep.
///
/// Cycles may overlap up to [`MAX_IN_FLIGHT_CYCLES`]; deliveries are
/// ordered by cycle completion, not cycle start, so when a later cycle
/// finishes first its record arrives first (last-completed-wins).
///
/// [`start`]: DataSource::start
pub struct NetworkSource {
    client: StatusClient,
    sink: Arc<dyn RecordSink>,
    config_tx: watch::Sender<PollConfig>,
    in_flight: Arc<Semaphore>,
    scheduler: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for NetworkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkSource")
            .field("config", &*self.config_tx.borrow())
            .field("running", &self.scheduler.is_some())
            .finish_non_exhaustive()
    }
}

impl NetworkSource {
    /// Creates a network source with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: PollConfig, sink: Arc<dyn RecordSink>) -> Result<Self, reqwest::Error> {
        let client = StatusClient::with_defaults()?;
        Ok(Self::with_client(client, config, sink))
    }

    /// Creates a network source with a caller-supplied HTTP client.
    #[must_use]
    pub fn with_client(
        client: StatusClient,
        config: PollConfig,
        sink: Arc<dyn RecordSink>,
    ) -> Self {
        let (config_tx, _) = watch::channel(config);
        Self {
            client,
            sink,
            config_tx,
            in_flight: Arc::new(Semaphore::new(MAX_IN_FLIGHT_CYCLES)),
            scheduler: None,
        }
    }

    /// Returns true while the scheduler task is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.scheduler.is_some()
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> PollConfig {
        self.config_tx.borrow().clone()
    }
}

impl DataSource for NetworkSource {
    fn start(&mut self) {
        if self.scheduler.is_some() {
            tracing::debug!("Poller already running, ignoring start");
            return;
        }

        let config = self.config();
        tracing::info!(
            server = %config.server_address,
            interval_ms = config.poll_interval_ms,
            "Starting status poller",
        );

        self.scheduler = Some(tokio::spawn(scheduler_loop(
            self.client.clone(),
            Arc::clone(&self.sink),
            self.config_tx.subscribe(),
            Arc::clone(&self.in_flight),
        )));
    }

    fn stop(&mut self) {
        if let Some(handle) = self.scheduler.take() {
            // Cancels future ticks only; dispatched cycles are separate
            // tasks and run to completion.
            handle.abort();
            tracing::info!("Status poller stopped");
        }
    }

    fn update_config(&mut self, config: PollConfig) {
        tracing::debug!(
            server = %config.server_address,
            interval_ms = config.poll_interval_ms,
            "Poll configuration updated",
        );
        self.config_tx.send_replace(config);
    }
}

impl Drop for NetworkSource {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fires poll cycles until aborted.
///
/// Fixed-delay scheduling: dispatch, then sleep the interval from the
/// cycle's own config snapshot, so interval updates take effect on the
/// next tick.
async fn scheduler_loop(
    client: StatusClient,
    sink: Arc<dyn RecordSink>,
    config_rx: watch::Receiver<PollConfig>,
    in_flight: Arc<Semaphore>,
) {
    loop {
        let config = config_rx.borrow().clone();

        match Arc::clone(&in_flight).try_acquire_owned() {
            Ok(permit) => {
                let client = client.clone();
                let sink = Arc::clone(&sink);
                let url = status_url(&config.server_address);
                tokio::spawn(async move {
                    let record = poll_cycle(&client, &url).await;
                    sink.deliver(record);
                    drop(permit);
                });
            }
            Err(_) => {
                tracing::warn!(
                    max_in_flight = MAX_IN_FLIGHT_CYCLES,
                    "Skipping poll tick, previous cycles still in flight",
                );
            }
        }

        tokio::time::sleep(config.interval()).await;
    }
}

/// Runs one fetch-parse cycle, always producing a record.
///
/// Connectivity failures and malformed payloads both degrade to the
/// no-connection record; they are distinguished only in the logs.
async fn poll_cycle(client: &StatusClient, url: &str) -> StatusRecord {
    match client.fetch(url).await {
        Ok(bytes) => match parse_status(&bytes, Utc::now()) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, url, "Malformed status payload, reporting no connection");
                StatusRecord::no_connection(Utc::now())
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, url, "Status fetch failed, reporting no connection");
            StatusRecord::no_connection(Utc::now())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ChannelSink;

    fn test_source() -> NetworkSource {
        let (sink, _rx) = ChannelSink::channel();
        NetworkSource::new(PollConfig::default(), Arc::new(sink)).unwrap()
    }

    #[tokio::test]
    async fn test_start_is_idempotent() {
        let mut source = test_source();
        assert!(!source.is_running());

        source.start();
        assert!(source.is_running());

        // Second start is a no-op, not a second scheduler.
        source.start();
        assert!(source.is_running());

        source.stop();
        assert!(!source.is_running());
    }

    #[tokio::test]
    async fn test_stop_without_start() {
        let mut source = test_source();
        source.stop();
        assert!(!source.is_running());
    }

    #[tokio::test]
    async fn test_update_config_snapshot() {
        let mut source = test_source();
        assert_eq!(source.config().poll_interval_ms, 2000);

        source.update_config(PollConfig::new("10.0.0.7".to_string(), 500));

        let config = source.config();
        assert_eq!(config.server_address, "10.0.0.7");
        assert_eq!(config.poll_interval_ms, 500);
    }
}
