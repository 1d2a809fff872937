//! Flow states and the values they carry.

use serde::{Deserialize, Serialize};
use shared_types::Balance;
use std::fmt;
use std::str::FromStr;

/// Position of the client in the recharge flow.
///
/// ```text
/// Scanning → BalanceLoading → AwaitingAmountSelection ─────────────→ Paying → Confirmed
///                                     │                        ↗       │          │
///                                     └→ PaymentMethodSelection    ←───┘ (fail)   │
///                                                 ↑ (variant B)                   │
///                             AwaitingAmountSelection ←────── reset delay ─────────┘
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    Scanning,
    BalanceLoading,
    AwaitingAmountSelection {
        selected: Option<Balance>,
    },
    PaymentMethodSelection {
        amount: Balance,
        method: Option<PaymentMethod>,
    },
    Paying {
        amount: Balance,
        /// Method chosen in the method step, kept for a retry
        method: Option<PaymentMethod>,
    },
    Confirmed {
        new_balance: Balance,
    },
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Scanning => "scanning",
            FlowState::BalanceLoading => "balance_loading",
            FlowState::AwaitingAmountSelection { .. } => "awaiting_amount",
            FlowState::PaymentMethodSelection { .. } => "payment_method",
            FlowState::Paying { .. } => "paying",
            FlowState::Confirmed { .. } => "confirmed",
        }
    }

    /// Amount currently chosen, if any
    pub fn selected_amount(&self) -> Option<Balance> {
        match self {
            FlowState::AwaitingAmountSelection { selected } => *selected,
            FlowState::PaymentMethodSelection { amount, .. } | FlowState::Paying { amount, .. } => {
                Some(*amount)
            }
            _ => None,
        }
    }
}

/// Payment method offered in the method step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Card, PaymentMethod::Wallet];
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "wallet" => Ok(PaymentMethod::Wallet),
            other => Err(format!("unknown payment method: {}", other)),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => f.write_str("card"),
            PaymentMethod::Wallet => f.write_str("wallet"),
        }
    }
}

/// What the balance display is showing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceDisplay {
    /// No ticket yet
    Empty,
    Loading,
    Known(Balance),
    /// Lookup failed
    Unavailable,
}

impl BalanceDisplay {
    pub fn text(&self) -> String {
        match self {
            BalanceDisplay::Empty => String::new(),
            BalanceDisplay::Loading => "...".to_string(),
            BalanceDisplay::Known(balance) => shared_types::format_money(*balance),
            BalanceDisplay::Unavailable => "---".to_string(),
        }
    }
}
