// Allow missing docs for internal items in development
#![allow(missing_docs)]

//! MR-02 API Gateway - HTTP interface of the ticket balance ledger.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      API GATEWAY (mr-02)                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │   GET  /api/balance/:id?sig=   POST /api/recharge   /health   │
//! │                         │                                     │
//! │  ┌──────────────────────┴───────────────────────┐            │
//! │  │               Middleware Stack                │            │
//! │  │   Tracing → CORS → Timeout → Body limit       │            │
//! │  └──────────────────────┬───────────────────────┘            │
//! │                         │                                     │
//! │                Arc<dyn BalanceApi>                            │
//! └─────────────────────────┼────────────────────────────────────┘
//!                           ▼
//!                 mr-01-ledger (BalanceService)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use mr_02_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let config = GatewayConfig::default();
//! let service = ApiGatewayService::from_config(config)?;
//! service.start(shutdown_signal()).await?;
//! ```
//!
//! # Status Codes
//!
//! | Outcome | Status |
//! |---------|--------|
//! | success | 200 |
//! | invalid amount / malformed body | 400 |
//! | invalid ticket signature | 403 |
//! | body over `limits.max_request_size` | 413 |
//! | request over `timeouts.request` | 408 |

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;

// Re-exports for public API
pub use domain::config::GatewayConfig;
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use router::{build_router, AppState};
pub use service::ApiGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
