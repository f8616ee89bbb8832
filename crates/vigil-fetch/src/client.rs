//! Bounded HTTP client for the status endpoint.

use bytes::{Bytes, BytesMut};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Configuration for the status client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Timeout for reading the response.
    pub read_timeout: Duration,
    /// Maximum number of response body bytes to read. Anything past the
    /// cap is discarded.
    pub body_limit: usize,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_millis(5000),
            read_timeout: Duration::from_millis(5000),
            body_limit: 500,
            user_agent: format!("vigil/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching the status document.
///
/// Every variant is a connectivity-class failure from the poller's point
/// of view: no variant is retried within a cycle, and all of them degrade
/// to the no-connection record. The distinction only matters for logging.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The connect or read timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The server could not be reached, or answered with a non-success
    /// status.
    #[error("Server unreachable: {reason}")]
    Unreachable {
        /// What went wrong (connect error or HTTP status).
        reason: String,
    },

    /// Any other HTTP-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client with bounded timeouts and a bounded response body read.
#[derive(Debug, Clone)]
pub struct StatusClient {
    client: Client,
    config: ClientConfig,
}

impl StatusClient {
    /// Creates a new status client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs one GET against the status endpoint, returning at most
    /// `body_limit` bytes of the response body.
    ///
    /// The cap is a deliberate bound against unbounded reads: a body
    /// larger than the cap is silently cut at `body_limit` bytes, so two
    /// bodies with the same first `body_limit` bytes fetch identically.
    ///
    /// There is no retry here; the next scheduled poll cycle is the retry
    /// mechanism.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Timeout`] when either timeout elapses,
    /// [`FetchError::Unreachable`] on connect failures and non-2xx
    /// responses, and [`FetchError::Http`] for other transport failures.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Unreachable {
                reason: format!("status {status}"),
            });
        }

        let mut body = BytesMut::with_capacity(self.config.body_limit);
        while let Some(chunk) = response.chunk().await.map_err(Self::classify_error)? {
            let remaining = self.config.body_limit - body.len();
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body.freeze())
    }

    /// Maps transport errors onto the fetch error taxonomy.
    fn classify_error(error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_connect() {
            FetchError::Unreachable {
                reason: error.to_string(),
            }
        } else {
            FetchError::Http(error)
        }
    }
}
