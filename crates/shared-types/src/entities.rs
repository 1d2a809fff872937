//! # Core Domain Entities
//!
//! Ticket identity and money representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in the ticket's currency unit.
///
/// Balances are plain floating point values on the wire, so they stay `f64`
/// end to end.
pub type Balance = f64;

/// Opaque identifier naming a prepaid balance account.
///
/// Sourced from a decoded QR payload or the `?id=` navigation parameter.
/// No format validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for TicketId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render an amount the way balances are displayed: `$25.50`.
pub fn format_money(amount: Balance) -> String {
    format!("${:.2}", amount)
}

/// True for amounts a recharge may carry: finite and strictly positive.
pub fn is_valid_recharge_amount(amount: Balance) -> bool {
    amount.is_finite() && amount > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_is_transparent_on_the_wire() {
        let id = TicketId::from("METRO-ABC-789");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"METRO-ABC-789\"");

        let back: TicketId = serde_json::from_str("\"USER-99-TEST\"").unwrap();
        assert_eq!(back.as_str(), "USER-99-TEST");
    }

    #[test]
    fn test_ticket_id_accepts_any_string() {
        let id = TicketId::new("  spaces & ünïcode ");
        assert_eq!(id.to_string(), "  spaces & ünïcode ");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(25.5), "$25.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(100.0), "$100.00");
    }

    #[test]
    fn test_recharge_amount_validity() {
        assert!(is_valid_recharge_amount(0.01));
        assert!(is_valid_recharge_amount(50.0));
        assert!(!is_valid_recharge_amount(0.0));
        assert!(!is_valid_recharge_amount(-5.0));
        assert!(!is_valid_recharge_amount(f64::NAN));
        assert!(!is_valid_recharge_amount(f64::INFINITY));
    }
}
