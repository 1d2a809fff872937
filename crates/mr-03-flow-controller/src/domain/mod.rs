pub mod config;
pub mod errors;
pub mod events;
pub mod link;
pub mod machine;
pub mod state;
pub mod view;

pub use config::{FlowConfig, Locale, Messages, DEFAULT_AMOUNTS};
pub use errors::ClientError;
pub use events::{Command, FlowEvent};
pub use link::{ticket_from_scan, ticket_from_url, TicketRef};
pub use machine::FlowMachine;
pub use state::{BalanceDisplay, FlowState, PaymentMethod};
pub use view::{ActionButton, AmountOption, BannerKind, FlowView, MethodOption, StatusBanner};
