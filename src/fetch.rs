//! Upstream page retrieval.
//!
//! The only suspension point in the system. Any failure, transport or HTTP
//! status, surfaces as [`Error::FetchUnavailable`]; partial bodies are never
//! handed on.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::encoding;
use crate::error::{Error, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("fuel-digest/", env!("CARGO_PKG_VERSION"));

/// Source of raw page HTML.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return its decoded HTML.
    async fn fetch_raw_html(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the HTTP client cannot be built (for example
    /// when no TLS backend initializes).
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetcher with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// As [`HttpFetcher::new`].
    pub fn with_default_timeout() -> Result<Self> {
        Self::new(DEFAULT_TIMEOUT)
    }
}

fn unavailable(url: &str, reason: impl ToString) -> Error {
    Error::FetchUnavailable {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_raw_html(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(url, format!("HTTP status {status}")));
        }

        let body = response.bytes().await.map_err(|e| unavailable(url, e))?;
        log::debug!("{url}: {} bytes", body.len());

        encoding::decode_html(&body)
    }
}
