//! Polling scheduler and record delivery for the vigil status poller.
//!
//! This crate drives the poll cycles:
//!
//! - [`DataSource`] - Lifecycle contract shared by all record producers
//! - [`NetworkSource`] - Periodic HTTP poller implementing it
//! - [`RecordSink`] - Delivery contract for the downstream consumer
//! - [`ChannelSink`] - Channel-backed sink for async consumers
//!
//! One scheduler task fires the cadence; each tick dispatches a worker
//! task that fetches, parses, and delivers exactly one
//! [`StatusRecord`](vigil_types::StatusRecord).

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod network;
mod sink;
mod source;

pub use network::{MAX_IN_FLIGHT_CYCLES, NetworkSource};
pub use sink::{ChannelSink, RecordSink};
pub use source::DataSource;
