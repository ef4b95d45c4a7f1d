//! Page fetching.
//!
//! [`PageFetcher`] is the seam between the pipeline and the network. The
//! production implementation, [`HttpFetcher`], performs exactly one GET per
//! page with a fixed timeout and treats any non-success status as an
//! error. There is no retry.

use std::time::Duration;

use async_trait::async_trait;

/// Boxed error returned by a [`PageFetcher`].
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Retrieves the markup of a published table.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the body of `url`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// [`PageFetcher`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("focos/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        log::info!("Fetching {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        log::debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
