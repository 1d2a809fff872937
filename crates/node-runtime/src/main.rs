//! # Metro Recharge Node Runtime
//!
//! Serves the balance API (`/api/balance/:id`, `/api/recharge`, `/health`)
//! over an in-memory ledger.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG`, default `info`)
//! 2. Load configuration (defaults, `MR_CONFIG` file, `MR_*` overrides)
//! 3. Build ledger, signature policy and HTTP gateway
//! 4. Serve until Ctrl+C, then drain in-flight requests

use anyhow::{Context, Result};
use node_runtime::{load_config, NodeRuntime};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => warn!(error = %e, "Cannot listen for Ctrl+C; shutting down"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = load_config().context("failed to load configuration")?;

    // Create and start the node runtime
    let runtime = NodeRuntime::new(config)?;
    runtime.start(shutdown_signal()).await?;

    info!("Node stopped");
    Ok(())
}
