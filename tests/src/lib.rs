//! # Metro Recharge Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── support.rs    # Gateway on an ephemeral port
//! │   ├── http_api.rs   # Balance API over real HTTP
//! │   └── flows.rs      # Flow controller against a live gateway
//! │
//! └── benches/
//!     └── ledger_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mr-tests
//!
//! # Benchmarks
//! cargo bench -p mr-tests
//! ```

pub mod integration;
