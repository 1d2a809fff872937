//! Ports the flow controller drives.

pub mod client;
pub mod scanner;

pub use client::BalanceClient;
pub use scanner::{NoopScanner, ScannerPort};
