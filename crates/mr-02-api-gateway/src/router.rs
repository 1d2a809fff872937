use crate::domain::config::GatewayConfig;
use crate::handlers::{get_balance, health, not_found, recharge};
use crate::middleware::{create_cors_layer, TracingLayer};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use mr_01_ledger::BalanceApi;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn BalanceApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn BalanceApi>) -> Self {
        Self { api }
    }
}

/// Build the full HTTP router: `/api/*` plus `/health`, with the middleware stack.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TracingLayer::new())
        .layer(create_cors_layer(&config.cors))
        .layer(TimeoutLayer::new(config.timeouts.request))
        .layer(DefaultBodyLimit::max(config.limits.max_request_size));

    let api = Router::new()
        .route("/balance/:id", get(get_balance))
        .route("/recharge", post(recharge));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware)
        .with_state(state)
}
