use crate::domain::{Balance, LedgerError, TicketId};

/// Ledger storage abstraction.
///
/// Implementations decide their own concurrency story; callers get no
/// ordering guarantee between concurrent credits to the same ticket.
pub trait LedgerStore: Send + Sync {
    /// Current balance, `0.0` for unknown tickets. Must not create entries.
    fn get(&self, ticket: &TicketId) -> Result<Balance, LedgerError>;

    /// Add `amount` (creating the entry at `0.0` first if needed) and return
    /// the new balance. Amount validation is the caller's job, but a result
    /// that is not finite fails with `InvalidAmount` and changes nothing.
    fn credit(&self, ticket: &TicketId, amount: Balance) -> Result<Balance, LedgerError>;

    /// Number of tickets with an entry.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
