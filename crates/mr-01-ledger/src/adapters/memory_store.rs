use crate::domain::{Balance, LedgerError, TicketId};
use crate::ports::LedgerStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Tickets preloaded by the demo deployment.
pub const DEMO_TICKETS: &[(&str, Balance)] = &[("METRO-ABC-789", 25.50), ("USER-99-TEST", 100.00)];

/// In-memory ledger. Contents are lost on restart.
///
/// A credit is one read-modify-write under the write lock, so two credits
/// to the same ticket never overwrite each other.
pub struct InMemoryLedger {
    balances: RwLock<HashMap<TicketId, Balance>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_balances<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, Balance)>,
        T: Into<TicketId>,
    {
        let balances = entries
            .into_iter()
            .map(|(ticket, balance)| (ticket.into(), balance))
            .collect();
        Self {
            balances: RwLock::new(balances),
        }
    }

    pub fn with_demo_tickets() -> Self {
        Self::with_balances(DEMO_TICKETS.iter().copied())
    }

    pub fn contains(&self, ticket: &TicketId) -> bool {
        self.balances.read().contains_key(ticket)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedger {
    fn get(&self, ticket: &TicketId) -> Result<Balance, LedgerError> {
        Ok(self.balances.read().get(ticket).copied().unwrap_or(0.0))
    }

    fn credit(&self, ticket: &TicketId, amount: Balance) -> Result<Balance, LedgerError> {
        let mut balances = self.balances.write();
        let current = balances.get(ticket).copied().unwrap_or(0.0);
        let updated = current + amount;
        // A balance that no longer fits an f64 cannot be serialized as a number
        if !updated.is_finite() {
            return Err(LedgerError::InvalidAmount { amount });
        }
        balances.insert(ticket.clone(), updated);
        Ok(updated)
    }

    fn len(&self) -> usize {
        self.balances.read().len()
    }
}
