pub mod http_client;

pub use http_client::{HttpBalanceClient, DEFAULT_API_BASE};
