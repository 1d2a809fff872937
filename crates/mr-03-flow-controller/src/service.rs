//! Flow controller: runs the machine's commands against real I/O.
//!
//! Network calls and timers run as spawned tasks that post their outcome
//! back into the controller's event channel, so the machine only ever sees
//! one event at a time.

use crate::domain::{Command, FlowConfig, FlowEvent, FlowMachine, FlowState, FlowView};
use crate::ports::{BalanceClient, NoopScanner, ScannerPort};
use shared_types::RechargeRequest;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Handle for feeding events (user input, scanner results) into a controller.
pub type FlowSender = mpsc::UnboundedSender<FlowEvent>;

pub struct FlowController<A: BalanceClient> {
    machine: FlowMachine,
    client: Arc<A>,
    scanner: Box<dyn ScannerPort>,
    events_tx: FlowSender,
    events_rx: mpsc::UnboundedReceiver<FlowEvent>,
}

impl<A: BalanceClient> FlowController<A> {
    pub fn new(config: FlowConfig, client: A) -> Self {
        Self::with_scanner(config, client, Box::new(NoopScanner))
    }

    pub fn with_scanner(config: FlowConfig, client: A, scanner: Box<dyn ScannerPort>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            machine: FlowMachine::new(config),
            client: Arc::new(client),
            scanner,
            events_tx,
            events_rx,
        }
    }

    pub fn sender(&self) -> FlowSender {
        self.events_tx.clone()
    }

    pub fn state(&self) -> &FlowState {
        self.machine.state()
    }

    pub fn view(&self) -> FlowView {
        self.machine.view()
    }

    /// Feed one event to the machine and start the resulting commands.
    pub fn dispatch(&mut self, event: FlowEvent) {
        for command in self.machine.handle(event) {
            self.execute(command);
        }
    }

    /// Wait for the next queued event and dispatch it.
    ///
    /// Returns `false` once every sender is gone, which cannot happen while
    /// the controller itself is alive; callers loop on it or `select!` it
    /// against their own input.
    pub async fn step(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Receive the next queued event without dispatching it.
    pub async fn next_event(&mut self) -> Option<FlowEvent> {
        self.events_rx.recv().await
    }

    fn execute(&mut self, command: Command) {
        debug!(?command, "executing");
        match command {
            Command::StartScanner => self.scanner.start(),
            Command::StopScanner => self.scanner.stop(),
            Command::FetchBalance { id, signature } => {
                let client = Arc::clone(&self.client);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let event = match client.get_balance(&id, signature.as_deref()).await {
                        Ok(response) => {
                            info!(ticket = %id, balance = response.balance, "balance loaded");
                            FlowEvent::BalanceLoaded(response.balance)
                        }
                        Err(e) => {
                            warn!(ticket = %id, error = %e, "balance lookup failed");
                            FlowEvent::BalanceFailed(e)
                        }
                    };
                    let _ = tx.send(event);
                });
            }
            Command::SubmitRecharge {
                id,
                amount,
                signature,
            } => {
                let client = Arc::clone(&self.client);
                let tx = self.events_tx.clone();
                let request = RechargeRequest {
                    id,
                    amount,
                    signature,
                };
                tokio::spawn(async move {
                    let event = match client.recharge(&request).await {
                        Ok(response) => {
                            info!(
                                ticket = %request.id,
                                amount,
                                new_balance = response.new_balance,
                                "recharge confirmed"
                            );
                            FlowEvent::RechargeSucceeded(response)
                        }
                        Err(e) => {
                            warn!(ticket = %request.id, error = %e, "recharge failed");
                            FlowEvent::RechargeFailed(e)
                        }
                    };
                    let _ = tx.send(event);
                });
            }
            Command::ScheduleReset(delay) => self.post_after(delay, FlowEvent::ResetElapsed),
            Command::ScheduleBannerHide { generation, delay } => {
                self.post_after(delay, FlowEvent::BannerElapsed(generation))
            }
        }
    }

    /// The deadline is fixed now, not when the timer task first runs.
    fn post_after(&self, delay: Duration, event: FlowEvent) {
        let deadline = Instant::now() + delay;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(event);
        });
    }
}
