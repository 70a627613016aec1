//! HTTP client for the blockchain server's JSON API.
//!
//! This module provides the unified [`ChainClient`] for making requests to
//! the demo blockchain server:
//! - chain overview and pending transactions (read-only JSON endpoints)
//! - per-address balance lookups
//! - mining and chain-reset triggers (form POST endpoints)
//!
//! # Example
//!
//! ```ignore
//! use crate::client::ChainClient;
//!
//! let client = ChainClient::new("http://127.0.0.1:8000")?;
//! let chain = client.get_chain().await?;
//! ```

use reqwest::Client;
use std::time::Duration;

use crate::constants::{REQUEST_TIMEOUT, STATUS_PROBE_TIMEOUT};
use crate::domain::ChainError;

mod balances;
mod chain;
mod mining;

#[cfg(test)]
mod tests;

// ============================================================================
// Chain API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ChainClient {
    /// Server base URL without a trailing slash.
    base_url: String,
    /// HTTP client for requests.
    pub(crate) client: Client,
}

impl ChainClient {
    /// Creates a new client for the given server base URL.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::ClientInit` if the HTTP client fails to
    /// initialize (e.g., TLS backend unavailable).
    pub fn new(base_url: &str) -> Result<Self, ChainError> {
        let client = Self::build_http_client()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build the HTTP client with connection pooling.
    fn build_http_client() -> Result<Client, ChainError> {
        Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ChainError::client_init(e.to_string()))
    }

    /// The configured server base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path under the blockchain app prefix.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/blockchain/{}", self.base_url, path)
    }

    pub(crate) fn build_get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header("accept", "application/json")
    }

    /// Probe server reachability.
    ///
    /// The server exposes no dedicated health endpoint, so the chain API is
    /// probed with a short timeout and only the status line is inspected.
    ///
    /// # Errors
    ///
    /// Returns a human-readable description if the server is unreachable.
    pub async fn get_server_status(&self) -> std::result::Result<(), String> {
        let url = self.url("api/chain/");

        let response = self
            .build_get(&url)
            .timeout(STATUS_PROBE_TIMEOUT)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => Err(format!(
                "Server at {} answered with HTTP {}",
                self.base_url,
                resp.status()
            )),
            Err(e) => Err(format!(
                "Unable to connect to server at {}. Error: {}",
                self.base_url, e
            )),
        }
    }
}
