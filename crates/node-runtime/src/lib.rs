//! # Node Runtime Library
//!
//! Builds the Metro Recharge server from configuration. The binary in
//! `main.rs` adds logging and the Ctrl+C handler.

#![allow(missing_docs)]

pub mod container;

use std::future::Future;

use anyhow::{Context, Result};
use mr_02_api_gateway::{ApiGatewayService, GatewayConfig};
use tokio::net::TcpListener;
use tracing::info;

pub use container::{load_config, load_config_with, ConfigLoadError};

/// The server runtime: one balance API over one in-memory ledger.
pub struct NodeRuntime {
    gateway: ApiGatewayService,
}

impl NodeRuntime {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let gateway =
            ApiGatewayService::from_config(config).context("failed to build the balance API")?;
        Ok(Self { gateway })
    }

    pub fn gateway(&self) -> &ApiGatewayService {
        &self.gateway
    }

    fn announce(&self) {
        let config = self.gateway.config();
        info!("===========================================");
        info!("  Metro Recharge Node v{}", mr_02_api_gateway::VERSION);
        info!("===========================================");
        info!(
            "Signatures: {}",
            if config.security.require_signature {
                "required"
            } else {
                "optional"
            }
        );
        info!("Tickets in ledger: {}", self.gateway.api().ticket_count());
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.announce();
        self.gateway
            .start(shutdown)
            .await
            .context("balance API terminated")
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn start_on<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.announce();
        self.gateway
            .run(listener, shutdown)
            .await
            .context("balance API terminated")
    }
}
