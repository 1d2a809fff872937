//! Sans-IO recharge flow state machine.
//!
//! `handle` consumes one event, updates the state and returns the side
//! effects to run. Events that make no sense in the current state are
//! dropped without effect.

use super::config::FlowConfig;
use super::errors::ClientError;
use super::events::{Command, FlowEvent};
use super::link::{ticket_from_scan, ticket_from_url, TicketRef};
use super::state::{BalanceDisplay, FlowState, PaymentMethod};
use super::view::{ActionButton, AmountOption, BannerKind, FlowView, MethodOption, StatusBanner};
use shared_types::{is_valid_recharge_amount, Balance, RechargeResponse};
use tracing::debug;

pub struct FlowMachine {
    config: FlowConfig,
    state: FlowState,
    ticket: Option<TicketRef>,
    balance: BalanceDisplay,
    scanner_active: bool,
    /// Last payment attempt failed and the button offers a retry
    retry: bool,
    banner: StatusBanner,
    banner_generation: u64,
}

impl FlowMachine {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            state: FlowState::Scanning,
            ticket: None,
            balance: BalanceDisplay::Empty,
            scanner_active: false,
            retry: false,
            banner: StatusBanner::hidden(),
            banner_generation: 0,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn ticket(&self) -> Option<&TicketRef> {
        self.ticket.as_ref()
    }

    pub fn banner_generation(&self) -> u64 {
        self.banner_generation
    }

    pub fn handle(&mut self, event: FlowEvent) -> Vec<Command> {
        let from = self.state.name();
        let commands = match event {
            FlowEvent::Started { url } => self.on_started(url.as_deref()),
            FlowEvent::ScanSucceeded(text) => self.on_scan(&text),
            FlowEvent::ScanFailed(_) => Vec::new(),
            FlowEvent::BalanceLoaded(balance) => self.on_balance_loaded(balance),
            FlowEvent::BalanceFailed(err) => self.on_balance_failed(&err),
            FlowEvent::AmountSelected(amount) => self.on_amount_selected(amount),
            FlowEvent::PaymentMethodSelected(method) => self.on_method_selected(method),
            FlowEvent::ActionPressed => self.on_action(),
            FlowEvent::RechargeSucceeded(response) => self.on_recharge_succeeded(&response),
            FlowEvent::RechargeFailed(err) => self.on_recharge_failed(&err),
            FlowEvent::ResetElapsed => self.on_reset(),
            FlowEvent::BannerElapsed(generation) => {
                if generation == self.banner_generation {
                    self.banner.visible = false;
                }
                Vec::new()
            }
        };

        if from != self.state.name() {
            debug!(from, to = self.state.name(), "flow transition");
        }
        commands
    }

    fn on_started(&mut self, url: Option<&str>) -> Vec<Command> {
        if self.ticket.is_some() || self.scanner_active {
            return Vec::new();
        }

        match url.and_then(ticket_from_url) {
            Some(ticket) => self.accept_ticket(ticket),
            None => {
                self.scanner_active = true;
                vec![Command::StartScanner]
            }
        }
    }

    fn on_scan(&mut self, text: &str) -> Vec<Command> {
        if self.state != FlowState::Scanning || self.ticket.is_some() {
            return Vec::new();
        }

        match ticket_from_scan(text) {
            Some(ticket) => self.accept_ticket(ticket),
            None => Vec::new(),
        }
    }

    fn accept_ticket(&mut self, ticket: TicketRef) -> Vec<Command> {
        let mut commands = Vec::new();
        if self.scanner_active {
            self.scanner_active = false;
            commands.push(Command::StopScanner);
        }

        commands.push(Command::FetchBalance {
            id: ticket.id.clone(),
            signature: ticket.signature.clone(),
        });
        self.ticket = Some(ticket);
        self.balance = BalanceDisplay::Loading;
        self.state = FlowState::BalanceLoading;
        commands
    }

    fn on_balance_loaded(&mut self, balance: Balance) -> Vec<Command> {
        if self.state != FlowState::BalanceLoading {
            return Vec::new();
        }

        self.balance = BalanceDisplay::Known(balance);
        self.state = FlowState::AwaitingAmountSelection { selected: None };
        Vec::new()
    }

    fn on_balance_failed(&mut self, err: &ClientError) -> Vec<Command> {
        if self.state != FlowState::BalanceLoading {
            return Vec::new();
        }

        let messages = self.config.locale.messages();
        let text = match err {
            ClientError::Unauthorized => messages.invalid_signature,
            _ => messages.connection_error,
        };

        self.balance = BalanceDisplay::Unavailable;
        self.state = FlowState::AwaitingAmountSelection { selected: None };
        vec![self.show_banner(text, BannerKind::Error)]
    }

    fn on_amount_selected(&mut self, amount: Balance) -> Vec<Command> {
        if !is_valid_recharge_amount(amount) {
            return Vec::new();
        }

        match self.state {
            FlowState::AwaitingAmountSelection { .. } | FlowState::PaymentMethodSelection { .. } => {
                self.retry = false;
                self.state = FlowState::AwaitingAmountSelection {
                    selected: Some(amount),
                };
            }
            _ => {}
        }
        Vec::new()
    }

    fn on_method_selected(&mut self, method: PaymentMethod) -> Vec<Command> {
        if let FlowState::PaymentMethodSelection { amount, .. } = self.state {
            self.state = FlowState::PaymentMethodSelection {
                amount,
                method: Some(method),
            };
        }
        Vec::new()
    }

    fn on_action(&mut self) -> Vec<Command> {
        match self.state {
            FlowState::AwaitingAmountSelection {
                selected: Some(amount),
            } if is_valid_recharge_amount(amount) => {
                if self.config.payment_method_step {
                    self.state = FlowState::PaymentMethodSelection {
                        amount,
                        method: None,
                    };
                    Vec::new()
                } else {
                    self.submit(amount, None)
                }
            }
            FlowState::PaymentMethodSelection {
                amount,
                method: Some(method),
            } => self.submit(amount, Some(method)),
            _ => Vec::new(),
        }
    }

    fn submit(&mut self, amount: Balance, method: Option<PaymentMethod>) -> Vec<Command> {
        let Some(ticket) = self.ticket.as_ref() else {
            return Vec::new();
        };

        let command = Command::SubmitRecharge {
            id: ticket.id.clone(),
            amount,
            signature: ticket.signature.clone(),
        };
        debug!(ticket = %ticket.id, amount, method = ?method, "submitting recharge");
        self.retry = false;
        self.state = FlowState::Paying { amount, method };
        vec![command]
    }

    fn on_recharge_succeeded(&mut self, response: &RechargeResponse) -> Vec<Command> {
        if !matches!(self.state, FlowState::Paying { .. }) {
            return Vec::new();
        }

        let text = self.config.locale.messages().recharge_ok;
        self.balance = BalanceDisplay::Known(response.new_balance);
        self.state = FlowState::Confirmed {
            new_balance: response.new_balance,
        };
        vec![
            self.show_banner(text, BannerKind::Success),
            Command::ScheduleReset(self.config.reset_delay),
        ]
    }

    fn on_recharge_failed(&mut self, err: &ClientError) -> Vec<Command> {
        let FlowState::Paying { amount, method } = self.state else {
            return Vec::new();
        };

        debug!(error = %err, "recharge failed");
        self.retry = true;
        self.state = match method {
            Some(method) => FlowState::PaymentMethodSelection {
                amount,
                method: Some(method),
            },
            None => FlowState::AwaitingAmountSelection {
                selected: Some(amount),
            },
        };

        let text = self.config.locale.messages().recharge_failed;
        vec![self.show_banner(text, BannerKind::Error)]
    }

    fn on_reset(&mut self) -> Vec<Command> {
        if matches!(self.state, FlowState::Confirmed { .. }) {
            self.retry = false;
            self.state = FlowState::AwaitingAmountSelection { selected: None };
        }
        Vec::new()
    }

    fn show_banner(&mut self, text: &str, kind: BannerKind) -> Command {
        self.banner_generation += 1;
        self.banner = StatusBanner {
            text: text.to_string(),
            kind,
            visible: true,
        };
        Command::ScheduleBannerHide {
            generation: self.banner_generation,
            delay: self.config.banner_duration,
        }
    }

    fn action_button(&self) -> ActionButton {
        let messages = self.config.locale.messages();
        match &self.state {
            FlowState::Scanning
            | FlowState::BalanceLoading
            | FlowState::AwaitingAmountSelection { selected: None } => {
                ActionButton::disabled(messages.pay_now)
            }
            FlowState::AwaitingAmountSelection {
                selected: Some(amount),
            } => {
                if self.retry {
                    ActionButton::enabled(messages.retry)
                } else if self.config.payment_method_step {
                    ActionButton::enabled(messages.continue_label)
                } else {
                    ActionButton::enabled(messages.pay_label(*amount))
                }
            }
            FlowState::PaymentMethodSelection { amount, method } => {
                if method.is_none() {
                    ActionButton::disabled(messages.pay_label(*amount))
                } else if self.retry {
                    ActionButton::enabled(messages.retry)
                } else {
                    ActionButton::enabled(messages.pay_label(*amount))
                }
            }
            FlowState::Paying { .. } => ActionButton::disabled(messages.processing),
            FlowState::Confirmed { .. } => ActionButton::disabled(messages.completed),
        }
    }

    pub fn view(&self) -> FlowView {
        let messages = self.config.locale.messages();
        let selected = self.state.selected_amount();

        let amounts = self
            .config
            .amounts
            .iter()
            .map(|&amount| AmountOption {
                amount,
                selected: selected == Some(amount),
            })
            .collect();

        let payment_methods = match &self.state {
            FlowState::PaymentMethodSelection { method, .. } => PaymentMethod::ALL
                .iter()
                .map(|&m| MethodOption {
                    method: m,
                    label: match m {
                        PaymentMethod::Card => messages.card,
                        PaymentMethod::Wallet => messages.wallet,
                    },
                    selected: *method == Some(m),
                })
                .collect(),
            _ => Vec::new(),
        };

        FlowView {
            scanner_visible: self.ticket.is_none(),
            form_visible: self.ticket.is_some(),
            ticket: self.ticket.as_ref().map(|t| t.id.to_string()),
            balance_text: self.balance.text(),
            amounts,
            payment_methods,
            button: self.action_button(),
            banner: self.banner.clone(),
        }
    }
}
