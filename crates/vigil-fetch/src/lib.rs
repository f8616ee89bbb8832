//! HTTP client and payload parsing for the vigil status poller.
//!
//! This crate provides the fetch half of a poll cycle:
//!
//! - [`url::status_url`] - Constructs the status endpoint URL
//! - [`StatusClient`] - Bounded-timeout HTTP client with a body size cap
//! - [`parse::parse_status`] - JSON payload to [`StatusRecord`] conversion
//!
//! [`StatusRecord`]: vigil_types::StatusRecord

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod parse;
pub mod url;

pub use client::{ClientConfig, FetchError, StatusClient};
pub use parse::{ParseError, parse_status};
