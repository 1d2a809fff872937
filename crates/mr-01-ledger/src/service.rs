//! Balance service: the `BalanceApi` implementation over a `LedgerStore`.

use crate::domain::{Balance, LedgerError, SignaturePolicy, TicketId};
use crate::ports::{BalanceApi, LedgerStore};
use shared_types::{format_money, is_valid_recharge_amount, BalanceResponse, RechargeResponse};
use std::sync::Arc;
use tracing::{info, warn};

/// Confirmation text returned with every successful recharge.
pub const RECHARGE_MESSAGE: &str = "Recharge processed instantly";

pub struct BalanceService {
    store: Arc<dyn LedgerStore>,
    policy: SignaturePolicy,
}

impl BalanceService {
    pub fn new(store: Arc<dyn LedgerStore>, policy: SignaturePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &SignaturePolicy {
        &self.policy
    }
}

impl BalanceApi for BalanceService {
    fn get_balance(
        &self,
        ticket: &TicketId,
        signature: Option<&str>,
    ) -> Result<BalanceResponse, LedgerError> {
        if let Err(e) = self.policy.check(ticket, signature) {
            warn!(ticket = %ticket, "balance lookup rejected: {}", e);
            return Err(e);
        }

        let balance = self.store.get(ticket)?;
        info!("balance lookup: {} -> {}", ticket, format_money(balance));

        Ok(BalanceResponse {
            id: ticket.clone(),
            balance,
        })
    }

    fn recharge(
        &self,
        ticket: &TicketId,
        amount: Balance,
        signature: Option<&str>,
    ) -> Result<RechargeResponse, LedgerError> {
        if !is_valid_recharge_amount(amount) {
            warn!(ticket = %ticket, amount, "recharge rejected: invalid amount");
            return Err(LedgerError::InvalidAmount { amount });
        }
        if let Err(e) = self.policy.check(ticket, signature) {
            warn!(ticket = %ticket, "recharge rejected: {}", e);
            return Err(e);
        }

        let new_balance = self.store.credit(ticket, amount).map_err(|e| {
            warn!(ticket = %ticket, amount, "recharge rejected: {}", e);
            e
        })?;
        info!(
            "recharge ok: {} +{} (new: {})",
            ticket,
            format_money(amount),
            format_money(new_balance)
        );

        Ok(RechargeResponse {
            success: true,
            new_balance,
            message: RECHARGE_MESSAGE.to_string(),
        })
    }

    fn ticket_count(&self) -> usize {
        self.store.len()
    }
}
