//! Document fetching
//!
//! The pipeline only needs "URL in, markup out". `HttpFetcher` does that over
//! a single reused reqwest client; tests swap in their own `Fetcher`.

use crate::error::{Result, ScrapeError};
use anyhow::Context;
use std::error::Error as _;
use std::time::Duration;
use tracing::debug;

/// Transport settings for `HttpFetcher`
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout_ms: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("county-seats/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: None,
        }
    }
}

/// Returns the raw markup behind a URL
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(url, &e))?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}

fn transport_error(url: &str, err: &reqwest::Error) -> ScrapeError {
    // reqwest's top-level message hides the useful part (DNS, refused, ...)
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    ScrapeError::Transport {
        url: url.to_string(),
        message,
    }
}
