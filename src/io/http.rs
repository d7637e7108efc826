use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{Error, Result};

/// Identifying client header sent with every request.
///
/// A browser-style string; some feed hosts reject unknown agents.
pub const HTTP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:91.0) Gecko/20100101 Firefox/105.0";

/// Per-request timeout. Blocks the pipeline for at most this long.
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP GET client shared by the feed fetch and the per-entry page fetches
///
/// One client, one fixed User-Agent, one fixed timeout, no retries.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new client with the fixed User-Agent and timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Issue one GET request and return the response body as text
    ///
    /// Fails with [`Error::Timeout`] when the request exceeds the fixed
    /// timeout, [`Error::Network`] on any other transport failure, and
    /// [`Error::InvalidResponse`] on a non-success status.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    url: url.to_string(),
                }
            } else {
                Error::Network(e)
            }
        })?;

        debug!(status = %response.status(), %url, "HTTP GET result");

        if !response.status().is_success() {
            return Err(Error::InvalidResponse {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    url: url.to_string(),
                }
            } else {
                Error::Network(e)
            }
        })?;

        Ok(text)
    }
}
