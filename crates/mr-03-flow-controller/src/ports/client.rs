use crate::domain::ClientError;
use async_trait::async_trait;
use shared_types::{BalanceResponse, RechargeRequest, RechargeResponse, TicketId};

/// Access to the balance API.
#[async_trait]
pub trait BalanceClient: Send + Sync + 'static {
    /// `GET /balance/:id`, with the signature when one is known
    async fn get_balance(
        &self,
        ticket: &TicketId,
        signature: Option<&str>,
    ) -> Result<BalanceResponse, ClientError>;

    /// `POST /recharge`
    async fn recharge(&self, request: &RechargeRequest) -> Result<RechargeResponse, ClientError>;
}
