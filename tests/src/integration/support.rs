//! # Test Support
//!
//! Runs a real gateway on `127.0.0.1:0` for the duration of a test.

use mr_01_ledger::BalanceApi;
use mr_02_api_gateway::{ApiGatewayService, GatewayConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A gateway serving on an ephemeral port. Dropping it shuts the server down.
pub struct TestServer {
    pub base_url: String,
    pub api: Arc<dyn BalanceApi>,
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Empty ledger, unsigned requests accepted
    pub async fn empty() -> Self {
        let mut config = GatewayConfig::default();
        config.ledger.seed_demo_tickets = false;
        Self::spawn(config).await
    }

    /// Demo tickets seeded
    pub async fn seeded() -> Self {
        Self::spawn(GatewayConfig::default()).await
    }

    pub async fn spawn(config: GatewayConfig) -> Self {
        let service = ApiGatewayService::from_config(config).expect("valid test config");
        let api = service.api();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            service
                .run(listener, async {
                    let _ = stopped.await;
                })
                .await
                .expect("gateway terminated with an error");
        });

        Self {
            base_url,
            api,
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Base URL of the `/api` routes
    pub fn api_base(&self) -> String {
        format!("{}/api", self.base_url)
    }

    /// Stop the server and wait for it to drain.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await.expect("gateway task panicked");
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

/// An `/api` base URL nothing is listening on.
pub fn unreachable_api_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}
