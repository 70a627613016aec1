//! Error types for blockchain server operations.
//!
//! This module defines the custom error types used throughout the chain
//! client operations, providing structured error handling with helpful
//! messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for chain client operations.
///
/// This enum provides specific error variants for different failure modes
/// encountered when talking to the blockchain server.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("Server returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body (or a placeholder if unreadable).
        body: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP client failed to initialize.
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl ChainError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error.
    #[must_use]
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_error_display() {
        let parse_err = ChainError::parse("missing balance field");
        assert_eq!(
            format!("{}", parse_err),
            "Parse error: missing balance field"
        );

        let http_err = ChainError::http(404, "not found");
        assert_eq!(
            format!("{}", http_err),
            "Server returned HTTP 404: not found"
        );

        let invalid_err = ChainError::invalid_input("empty address");
        assert_eq!(format!("{}", invalid_err), "Invalid input: empty address");
    }

    #[test]
    fn test_parse_error_creation() {
        let err = ChainError::parse("bad json");
        match err {
            ChainError::Parse { message } => assert_eq!(message, "bad json"),
            _ => panic!("Expected Parse variant"),
        }
    }

    #[test]
    fn test_http_error_creation() {
        let err = ChainError::http(500, "boom");
        match err {
            ChainError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            _ => panic!("Expected Http variant"),
        }
    }
}
