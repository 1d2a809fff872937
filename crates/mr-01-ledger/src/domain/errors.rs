use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Recharge amount is zero, negative or not a finite number.
    #[error("invalid amount")]
    InvalidAmount { amount: f64 },

    /// Signature missing while required, or not matching the ticket.
    #[error("invalid ticket signature")]
    InvalidSignature,

    #[error("storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Validation failures are the caller's fault and safe to show verbatim.
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::InvalidAmount { .. })
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, LedgerError::InvalidSignature)
    }
}
