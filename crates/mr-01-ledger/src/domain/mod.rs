pub mod errors;
pub mod signature;

pub use errors::LedgerError;
pub use signature::SignaturePolicy;
pub use shared_types::{Balance, TicketId};
