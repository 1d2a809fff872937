//! Cross-crate tests: ledger, gateway and flow controller wired together.

pub mod support;

mod flows;
mod http_api;
