//! Mining and chain-reset triggers.
//!
//! These call the server's form endpoints. The server mines synchronously
//! inside the request handler; the client's progress animation is driven
//! separately and deliberately does not track this request (see the
//! `progress` module).

use super::ChainClient;
use crate::domain::ChainError;

impl ChainClient {
    /// Ask the server to mine all pending transactions.
    ///
    /// Calls `POST /blockchain/mine/` with the miner address as a form
    /// field; the mining reward is credited to that address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is empty, the request fails, or the
    /// server answers with a non-success, non-redirect status (the form
    /// endpoint redirects on success).
    pub async fn mine_block(&self, miner_address: &str) -> Result<(), ChainError> {
        if miner_address.trim().is_empty() {
            return Err(ChainError::invalid_input("miner address must not be empty"));
        }

        let url = self.url("mine/");
        let response = self
            .client
            .post(&url)
            .form(&[("miner_address", miner_address)])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ChainError::http(status.as_u16(), body))
    }

    /// Reset the server's chain back to the genesis block.
    ///
    /// Calls `POST /blockchain/reset/`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success, non-redirect
    /// status.
    pub async fn reset_chain(&self) -> Result<(), ChainError> {
        let url = self.url("reset/");
        let response = self.client.post(&url).send().await?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ChainError::http(status.as_u16(), body))
    }
}
