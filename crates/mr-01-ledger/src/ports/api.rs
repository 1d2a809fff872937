//! # Inbound Port - BalanceApi
//!
//! Driving port used by the HTTP gateway.
//!
//! | Method | Signature check | Mutates |
//! |--------|-----------------|---------|
//! | `get_balance` | always (bypass when unsigned and not required) | no |
//! | `recharge` | when a signature is supplied or required | yes |

use crate::domain::{Balance, LedgerError, TicketId};
use shared_types::{BalanceResponse, RechargeResponse};

pub trait BalanceApi: Send + Sync {
    /// Current balance of `ticket`.
    ///
    /// # Errors
    /// - `InvalidSignature`: signature does not match (or is required and absent)
    fn get_balance(
        &self,
        ticket: &TicketId,
        signature: Option<&str>,
    ) -> Result<BalanceResponse, LedgerError>;

    /// Credit `amount` to `ticket`.
    ///
    /// # Errors
    /// - `InvalidAmount`: amount is not finite and strictly positive
    /// - `InvalidSignature`: supplied signature does not match, or required and absent
    fn recharge(
        &self,
        ticket: &TicketId,
        amount: Balance,
        signature: Option<&str>,
    ) -> Result<RechargeResponse, LedgerError>;

    /// Number of known tickets.
    fn ticket_count(&self) -> usize;
}
