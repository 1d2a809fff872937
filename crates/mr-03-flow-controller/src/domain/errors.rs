//! Balance API client errors.

use thiserror::Error;

/// Errors returned by a `BalanceClient`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, reset
    #[error("cannot reach balance API: {0}")]
    Network(String),

    /// The API rejected the ticket signature (403)
    #[error("invalid ticket signature")]
    Unauthorized,

    /// Any other non-2xx answer, with the server's `error` text
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Body did not match the wire contract
    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
