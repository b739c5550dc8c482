//! Transaction handlers: feed, fraud queue and manual review.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{FraudListParams, LimitParams};
use crate::app_state::AppState;
use crate::clients::TransactionListResponse;
use crate::domain::TransactionRecord;
use crate::error::{AdminError, ErrorResponse};

/// `GET /admin/transactions` — Payments and payouts, newest first.
///
/// # Errors
///
/// Returns [`AdminError`] on database failure.
#[utoipa::path(
    get,
    path = "/admin/transactions",
    tag = "Transactions",
    summary = "List transactions",
    description = "Payments and payouts merged into one feed, newest first, each tagged with `type`. Amounts are minor units.",
    params(LimitParams),
    responses(
        (status = 200, description = "Transaction feed", body = Vec<TransactionRecord>),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<impl IntoResponse, AdminError> {
    let Query(params) = params?;
    let feed = state.admin_service.list_transactions(params.value()).await?;
    Ok(Json(feed))
}

/// `GET /admin/transactions/fraud` — Transactions held for review.
///
/// # Errors
///
/// Returns [`AdminError`] when the transaction service fails.
#[utoipa::path(
    get,
    path = "/admin/transactions/fraud",
    tag = "Transactions",
    summary = "List flagged transactions",
    description = "Proxies the transaction service's `pending_review` queue.",
    params(FraudListParams),
    responses(
        (status = 200, description = "Flagged transactions", body = TransactionListResponse),
        (status = 400, description = "Invalid limit", body = ErrorResponse),
        (status = 500, description = "Transaction service failure", body = ErrorResponse),
    )
)]
pub async fn list_fraudulent_transactions(
    State(state): State<AppState>,
    params: Result<Query<FraudListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AdminError> {
    let Query(params) = params?;
    let list = state
        .admin_service
        .list_fraudulent_transactions(params.effective())
        .await?;
    Ok(Json(list))
}

/// `POST /admin/transactions/:reference/approve` — Release a transaction.
///
/// # Errors
///
/// Returns [`AdminError`] on a blank or refused reference.
#[utoipa::path(
    post,
    path = "/admin/transactions/{reference}/approve",
    tag = "Transactions",
    summary = "Approve transaction",
    params(("reference" = String, Path, description = "Transaction reference")),
    responses(
        (status = 204, description = "Transaction approved"),
        (status = 400, description = "Missing or refused reference", body = ErrorResponse),
        (status = 500, description = "Transaction service unreachable", body = ErrorResponse),
    )
)]
pub async fn approve_transaction(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    state.admin_service.approve_transaction(&reference).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /admin/transactions/:reference/decline` — Refuse a transaction.
///
/// # Errors
///
/// Returns [`AdminError`] on a blank or refused reference.
#[utoipa::path(
    post,
    path = "/admin/transactions/{reference}/decline",
    tag = "Transactions",
    summary = "Decline transaction",
    params(("reference" = String, Path, description = "Transaction reference")),
    responses(
        (status = 204, description = "Transaction declined"),
        (status = 400, description = "Missing or refused reference", body = ErrorResponse),
        (status = 500, description = "Transaction service unreachable", body = ErrorResponse),
    )
)]
pub async fn decline_transaction(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    state.admin_service.decline_transaction(&reference).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/fraud", get(list_fraudulent_transactions))
        .route("/transactions/{reference}/approve", post(approve_transaction))
        .route("/transactions/{reference}/decline", post(decline_transaction))
}
