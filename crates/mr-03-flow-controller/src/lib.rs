//! # mr-03-flow-controller
//!
//! Client side of Metro Recharge: the kiosk/phone flow from scanning a
//! ticket to a confirmed top-up.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  service.rs - FlowController (tokio driver, timers, requests)   │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↓ drives ↓
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/client.rs  - BalanceClient                               │
//! │  ports/scanner.rs - ScannerPort                                 │
//! │  adapters/http_client.rs - HttpBalanceClient (reqwest)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ commands ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/machine.rs - FlowMachine (sans-IO)                      │
//! │  domain/view.rs    - FlowView                                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Variants
//!
//! With `payment_method_step` off, pressing the action button after
//! choosing an amount pays at once. With it on, the button reads
//! `CONTINUE` and a card/wallet choice comes before payment.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::{FlowController, FlowSender};
