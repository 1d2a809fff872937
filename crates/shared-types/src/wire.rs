//! # Wire Contract
//!
//! JSON bodies exchanged over `/api`. Field names follow the deployed
//! frontend: `newBalance` is camelCase, the signature travels as `sig`.

use crate::entities::{Balance, TicketId};
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/balance/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

/// `200` body of `GET /api/balance/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub id: TicketId,
    pub balance: Balance,
}

/// Body of `POST /api/recharge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RechargeRequest {
    pub id: TicketId,
    pub amount: Balance,
    /// Optional ticket signature, checked when present.
    #[serde(default, rename = "sig", skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl RechargeRequest {
    pub fn new(id: TicketId, amount: Balance) -> Self {
        Self {
            id,
            amount,
            signature: None,
        }
    }
}

/// `200` body of `POST /api/recharge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeResponse {
    pub success: bool,
    pub new_balance: Balance,
    pub message: String,
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `200` body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub tickets: usize,
    pub version: String,
}
