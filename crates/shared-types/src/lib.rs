//! # Shared Types Crate
//!
//! Types shared by the balance API (`mr-02-api-gateway`) and the recharge
//! client (`mr-03-flow-controller`).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the JSON contract of `/api/balance` and
//!   `/api/recharge` is defined once, here.
//! - **Opaque Tickets**: a `TicketId` is never parsed or validated; whatever
//!   the QR code or URL carried is the identity.
//! - **One Signing Routine**: server verification and test fixtures produce
//!   signatures with the same `TicketSigner`.

pub mod entities;
pub mod security;
pub mod wire;

pub use entities::*;
pub use security::*;
pub use wire::*;
