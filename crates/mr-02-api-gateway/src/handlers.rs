//! HTTP handlers for the balance API.

use crate::domain::error::{ApiError, ApiResult};
use crate::router::AppState;
use crate::VERSION;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use shared_types::{
    BalanceQuery, BalanceResponse, HealthResponse, RechargeRequest, RechargeResponse, TicketId,
};

/// `GET /api/balance/:id?sig=<hex>`
pub async fn get_balance(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<BalanceQuery>, QueryRejection>,
) -> ApiResult<Json<BalanceResponse>> {
    let Path(id) = path?;
    let Query(query) = query?;
    let ticket = TicketId::from(id);

    let response = state.api.get_balance(&ticket, query.sig.as_deref())?;
    Ok(Json(response))
}

/// `POST /api/recharge` with `{id, amount, sig?}`
pub async fn recharge(
    State(state): State<AppState>,
    payload: Result<Json<RechargeRequest>, JsonRejection>,
) -> ApiResult<Json<RechargeResponse>> {
    let Json(request) = payload?;

    let response =
        state
            .api
            .recharge(&request.id, request.amount, request.signature.as_deref())?;
    Ok(Json(response))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        tickets: state.api.ticket_count(),
        version: VERSION.to_string(),
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("not found")
}
