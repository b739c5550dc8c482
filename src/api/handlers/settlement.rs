//! Settlement handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{PendingSettlementParams, TriggerSettlementRequest};
use crate::app_state::AppState;
use crate::domain::PendingSettlements;
use crate::error::{AdminError, ErrorResponse};

/// `GET /admin/settlements/pending` — Balance awaiting settlement.
///
/// # Errors
///
/// Returns [`AdminError`] on database failure.
#[utoipa::path(
    get,
    path = "/admin/settlements/pending",
    tag = "Settlements",
    summary = "Pending settlement total",
    params(PendingSettlementParams),
    responses(
        (status = 200, description = "Pending total in minor units", body = PendingSettlements),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn pending_settlements(
    State(state): State<AppState>,
    params: Result<Query<PendingSettlementParams>, QueryRejection>,
) -> Result<impl IntoResponse, AdminError> {
    let Query(params) = params?;
    let pending = state
        .admin_service
        .pending_settlements(params.currency.as_deref())
        .await?;
    Ok(Json(pending))
}

/// `POST /admin/settlements/trigger` — Settle one merchant now.
///
/// # Errors
///
/// Returns [`AdminError`] on an invalid body or a refused settlement.
#[utoipa::path(
    post,
    path = "/admin/settlements/trigger",
    tag = "Settlements",
    summary = "Trigger settlement",
    description = "Validates `merchant_id > 0`, defaults `currency` to NGN and forwards the run to the settlement service.",
    request_body = TriggerSettlementRequest,
    responses(
        (status = 204, description = "Settlement triggered"),
        (status = 400, description = "Invalid body or refused settlement", body = ErrorResponse),
        (status = 500, description = "Settlement service unreachable", body = ErrorResponse),
    )
)]
pub async fn trigger_settlement(
    State(state): State<AppState>,
    payload: Result<Json<TriggerSettlementRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdminError> {
    let Json(req) = payload?;
    state
        .admin_service
        .trigger_settlement(req.merchant_id, req.currency.as_deref())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Settlement routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settlements/pending", get(pending_settlements))
        .route("/settlements/trigger", post(trigger_settlement))
}
