//! Record delivery to the downstream consumer.

use tokio::sync::mpsc;
use vigil_types::StatusRecord;

/// Consumer-side contract for delivered records.
///
/// `deliver` is called exactly once per completed poll cycle, from the
/// worker task that ran the cycle. Implementations must not block.
pub trait RecordSink: Send + Sync {
    /// Accepts the record produced by one poll cycle.
    fn deliver(&self, record: StatusRecord);
}

/// Channel-backed sink handing records to an async consumer.
///
/// Records are delivered in cycle completion order. Once the receiving
/// half is dropped, further deliveries become no-ops, which makes
/// delivery after consumer teardown safe.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<StatusRecord>,
}

impl ChannelSink {
    /// Creates a sink and the receiver the consumer reads records from.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StatusRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl RecordSink for ChannelSink {
    fn deliver(&self, record: StatusRecord) {
        if self.tx.send(record).is_err() {
            tracing::debug!("Record consumer gone, dropping delivery");
        }
    }
}
