//! Balance API client over HTTP.

use crate::domain::ClientError;
use crate::ports::BalanceClient;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared_types::{BalanceResponse, ErrorBody, RechargeRequest, RechargeResponse, TicketId};
use std::time::Duration;
use tracing::debug;

/// Where the development server listens.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Balance API client.
#[derive(Debug, Clone)]
pub struct HttpBalanceClient {
    client: Client,
    base_url: Url,
}

impl HttpBalanceClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host:8080/api`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidEndpoint(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidEndpoint(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()));
        }

        if status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BalanceClient for HttpBalanceClient {
    async fn get_balance(
        &self,
        ticket: &TicketId,
        signature: Option<&str>,
    ) -> Result<BalanceResponse, ClientError> {
        let url = self.endpoint(&["balance", ticket.as_str()])?;
        debug!(%url, "fetching balance");

        let mut request = self.client.get(url);
        if let Some(sig) = signature {
            request = request.query(&[("sig", sig)]);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn recharge(&self, request: &RechargeRequest) -> Result<RechargeResponse, ClientError> {
        let url = self.endpoint(&["recharge"])?;
        debug!(%url, ticket = %request.id, amount = request.amount, "submitting recharge");

        let response = self.client.post(url).json(request).send().await?;
        let body: RechargeResponse = Self::decode(response).await?;

        if !body.success {
            return Err(ClientError::Rejected {
                status: StatusCode::OK.as_u16(),
                message: body.message,
            });
        }
        Ok(body)
    }
}
