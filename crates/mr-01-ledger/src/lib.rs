//! # mr-01-ledger
//!
//! Balance ledger subsystem for Metro Recharge.
//!
//! ## Role in System
//!
//! - **Ledger Store**: ticket id → balance, in process memory, behind the
//!   `LedgerStore` port so a persistent backend can replace it.
//! - **Signature Verifier**: HMAC check of the ticket id, with the unsigned
//!   bypass controlled by `require_signature`.
//! - **Balance API**: `get_balance` and `recharge`, consumed by the HTTP
//!   gateway (`mr-02-api-gateway`).
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/memory_store.rs - InMemoryLedger                      │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/api.rs   - BalanceApi (driving port)                     │
//! │  ports/store.rs - LedgerStore (driven port)                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/signature.rs - SignaturePolicy                          │
//! │  domain/errors.rs    - LedgerError                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Reads never create entries; unknown tickets read as `0.00`.
//! - Balances only grow: the sole mutation is an additive credit of a
//!   strictly positive, finite amount.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::BalanceService;
