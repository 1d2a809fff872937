//! Storage adapters for the ledger.

pub mod memory_store;

pub use memory_store::{InMemoryLedger, DEMO_TICKETS};
