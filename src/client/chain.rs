//! Chain overview and pending transaction fetching.

use serde_json::Value;

use super::ChainClient;
use crate::domain::{ChainError, ChainInfo, Transaction};

impl ChainClient {
    /// Fetch the full chain overview.
    ///
    /// Calls `GET /blockchain/api/chain/`, which returns the server's
    /// serialized chain: blocks, difficulty, mining reward, and the
    /// pending transaction pool.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    pub async fn get_chain(&self) -> Result<ChainInfo, ChainError> {
        let url = self.url("api/chain/");
        let response = self.build_get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChainError::http(status, body));
        }

        let data: Value = response.json().await?;
        Ok(ChainInfo::from_value(&data))
    }

    /// Fetch only the pending transaction pool.
    ///
    /// Calls `GET /blockchain/api/pending-transactions/`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// response without the expected `pending_transactions` array.
    pub async fn get_pending_transactions(&self) -> Result<Vec<Transaction>, ChainError> {
        let url = self.url("api/pending-transactions/");
        let response = self.build_get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChainError::http(status, body));
        }

        let data: Value = response.json().await?;

        let pending = data["pending_transactions"]
            .as_array()
            .ok_or_else(|| ChainError::parse("pending_transactions field missing"))?
            .iter()
            .map(Transaction::from_value)
            .collect();

        Ok(pending)
    }
}
