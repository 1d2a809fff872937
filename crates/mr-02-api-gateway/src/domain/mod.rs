//! Domain types for the API Gateway: configuration and error handling.

pub mod config;
pub mod error;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, ApiResult, GatewayError};
