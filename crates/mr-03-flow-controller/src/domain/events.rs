//! Inputs to and outputs from the flow machine.

use super::errors::ClientError;
use super::state::PaymentMethod;
use shared_types::{Balance, RechargeResponse, TicketId};
use std::time::Duration;

/// Something that happened: user input, a scanner result, a network answer
/// or an elapsed timer.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    /// Page opened; `url` is the navigation URL, which may carry `?id=`
    Started { url: Option<String> },
    ScanSucceeded(String),
    ScanFailed(String),
    BalanceLoaded(Balance),
    BalanceFailed(ClientError),
    AmountSelected(Balance),
    PaymentMethodSelected(PaymentMethod),
    ActionPressed,
    RechargeSucceeded(RechargeResponse),
    RechargeFailed(ClientError),
    ResetElapsed,
    BannerElapsed(u64),
}

/// Side effect requested by the machine, executed by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartScanner,
    StopScanner,
    FetchBalance {
        id: TicketId,
        signature: Option<String>,
    },
    SubmitRecharge {
        id: TicketId,
        amount: Balance,
        signature: Option<String>,
    },
    ScheduleReset(Duration),
    ScheduleBannerHide {
        generation: u64,
        delay: Duration,
    },
}
