//! API Gateway service - owns the balance API and serves it over HTTP.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::router::{build_router, AppState};
use axum::Router;
use mr_01_ledger::{BalanceApi, BalanceService, InMemoryLedger, SignaturePolicy};
use shared_types::TicketSigner;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    api: Arc<dyn BalanceApi>,
}

impl ApiGatewayService {
    /// Create a gateway over an existing balance API
    pub fn new(config: GatewayConfig, api: Arc<dyn BalanceApi>) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self { config, api })
    }

    /// Create a gateway with an in-memory ledger built from the configuration
    pub fn from_config(config: GatewayConfig) -> Result<Self, GatewayError> {
        let ledger = if config.ledger.seed_demo_tickets {
            InMemoryLedger::with_demo_tickets()
        } else {
            InMemoryLedger::new()
        };
        let policy = SignaturePolicy::new(
            TicketSigner::new(&config.security.signing_key),
            config.security.require_signature,
        );
        let api = Arc::new(BalanceService::new(Arc::new(ledger), policy));

        Self::new(config, api)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Balance API behind the HTTP routes
    pub fn api(&self) -> Arc<dyn BalanceApi> {
        Arc::clone(&self.api)
    }

    /// HTTP router with the full middleware stack
    pub fn router(&self) -> Router {
        build_router(AppState::new(Arc::clone(&self.api)), &self.config)
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn start<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{}: {}", addr, e)))?;

        self.run(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn run<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local: Option<SocketAddr> = listener.local_addr().ok();
        info!(
            addr = ?local,
            require_signature = self.config.security.require_signature,
            tickets = self.api.ticket_count(),
            "Balance API listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Balance API stopped");
        Ok(())
    }
}
