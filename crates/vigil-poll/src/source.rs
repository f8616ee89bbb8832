//! Lifecycle contract for record producers.

use vigil_types::PollConfig;

/// A producer of status records.
///
/// Sources are selected at composition time: the network poller in this
/// crate is one implementation, and local-sensor or wearable-device
/// sources can provide the same contract elsewhere. All three methods
/// are idempotent with respect to repeated calls.
pub trait DataSource {
    /// Begins producing records. A no-op if already running.
    fn start(&mut self);

    /// Stops producing records. Cycles already dispatched run to
    /// completion; future ticks are cancelled. A later [`start`]
    /// resumes with a fresh immediate first cycle.
    ///
    /// [`start`]: DataSource::start
    fn stop(&mut self);

    /// Replaces the configuration used by future cycles. Cycles already
    /// in flight keep the snapshot they started with.
    fn update_config(&mut self, config: PollConfig);
}
