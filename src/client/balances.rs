//! Balance lookup for a single address.

use serde_json::Value;

use super::ChainClient;
use crate::domain::ChainError;

impl ChainClient {
    /// Fetch the current balance of an address.
    ///
    /// Calls `GET /blockchain/api/balance/{address}/` and extracts the
    /// numeric `balance` field. The address is opaque to the client;
    /// unknown addresses are the server's concern (it reports a zero
    /// balance for addresses it has never seen).
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// response body without a numeric `balance` field.
    pub async fn get_balance(&self, address: &str) -> Result<f64, ChainError> {
        if address.trim().is_empty() {
            return Err(ChainError::invalid_input("address must not be empty"));
        }

        let url = self.url(&format!("api/balance/{address}/"));
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

        data["balance"]
            .as_f64()
            .ok_or_else(|| ChainError::parse("balance field missing or not numeric"))
    }
}
