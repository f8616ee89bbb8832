//! Core types for the vigil status poller.
//!
//! This crate provides the fundamental data structures used throughout
//! vigil:
//!
//! - [`StatusRecord`] - The result of one poll cycle
//! - [`AlarmState`] - Alarm level reported by the status server
//! - [`PollConfig`] - Server address and polling cadence
//! - [`ConfigWarning`] - Non-fatal configuration problems
//!
//! Error types live next to the operations that produce them, in
//! `vigil-fetch`.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod record;

pub use config::{
    ConfigWarning, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SERVER_ADDRESS, PollConfig,
};
pub use record::{AlarmState, NO_CONNECTION_PHRASE, StatusRecord};
