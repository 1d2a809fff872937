pub mod api;
pub mod store;

pub use api::BalanceApi;
pub use store::LedgerStore;
