//! MR-Kiosk: terminal front end for the Metro Recharge flow.
//!
//! Each stdin line is one user action; the screen is reprinted after every
//! event, including the ones that arrive from the network and timers.
//!
//! ```text
//! > scan METRO-ABC-789
//! ticket:  METRO-ABC-789
//! balance: $25.50
//! amounts:  $5   $10   $20   $50
//! x PAGAR AHORA
//! ```

pub mod input;

pub use input::{parse_line, Input, InputError, HELP};
