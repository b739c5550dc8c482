//! Merchant handlers: listing, approval, suspension and KYC review.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{LimitParams, parse_merchant_id};
use crate::app_state::AppState;
use crate::clients::KycQueueEntry;
use crate::domain::{ActionResult, Merchant};
use crate::error::{AdminError, ErrorResponse};

/// `GET /admin/merchants` — List merchants.
///
/// # Errors
///
/// Returns [`AdminError`] on database failure.
#[utoipa::path(
    get,
    path = "/admin/merchants",
    tag = "Merchants",
    summary = "List merchants",
    description = "Returns merchants newest first with their successful payment volume (minor units).",
    params(LimitParams),
    responses(
        (status = 200, description = "Merchant list", body = Vec<Merchant>),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn list_merchants(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<impl IntoResponse, AdminError> {
    let Query(params) = params?;
    let merchants = state.admin_service.list_merchants(params.value()).await?;
    Ok(Json(merchants))
}

/// `GET /admin/merchants/pending` — Merchants awaiting KYC review.
///
/// # Errors
///
/// Returns [`AdminError`] when the merchant service fails.
#[utoipa::path(
    get,
    path = "/admin/merchants/pending",
    tag = "Merchants",
    summary = "List pending-KYC merchants",
    description = "Proxies the merchant service's KYC queue filtered on `kyc_status=pending`.",
    responses(
        (status = 200, description = "KYC queue", body = Vec<KycQueueEntry>),
        (status = 500, description = "Merchant service failure", body = ErrorResponse),
    )
)]
pub async fn list_pending_merchants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AdminError> {
    let merchants = state.admin_service.list_pending_merchants().await?;
    Ok(Json(merchants))
}

/// `POST /admin/merchants/:id/approve` — Complete KYC and activate.
///
/// # Errors
///
/// Returns [`AdminError`] on an invalid id or a failed step.
#[utoipa::path(
    post,
    path = "/admin/merchants/{id}/approve",
    tag = "Merchants",
    summary = "Approve merchant",
    description = "Sets KYC status to `completed`, then account status to `active`. Not atomic: if activation fails, KYC stays completed.",
    params(("id" = i64, Path, description = "Merchant id")),
    responses(
        (status = 200, description = "Merchant active", body = ActionResult),
        (status = 400, description = "Invalid merchant id", body = ErrorResponse),
        (status = 500, description = "Merchant service failure", body = ErrorResponse),
    )
)]
pub async fn approve_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let id = parse_merchant_id(&id)?;
    let result = state.admin_service.approve_merchant(id).await?;
    Ok(Json(result))
}

/// `POST /admin/merchants/:id/suspend` — Suspend a merchant.
///
/// # Errors
///
/// Returns [`AdminError`] on an invalid or unknown id.
#[utoipa::path(
    post,
    path = "/admin/merchants/{id}/suspend",
    tag = "Merchants",
    summary = "Suspend merchant",
    description = "Sets the merchant's account status to `suspended` in the merchants table.",
    params(("id" = i64, Path, description = "Merchant id")),
    responses(
        (status = 200, description = "Merchant suspended", body = ActionResult),
        (status = 400, description = "Invalid merchant id", body = ErrorResponse),
        (status = 404, description = "Merchant not found", body = ErrorResponse),
    )
)]
pub async fn suspend_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let id = parse_merchant_id(&id)?;
    let result = state.admin_service.suspend_merchant(id).await?;
    Ok(Json(result))
}

/// `POST /admin/merchants/:id/kyc/approve` — Approve KYC via compliance.
///
/// # Errors
///
/// Returns [`AdminError`] on an invalid id or a failed step.
#[utoipa::path(
    post,
    path = "/admin/merchants/{id}/kyc/approve",
    tag = "KYC",
    summary = "Approve merchant KYC",
    description = "Records the approval with the compliance service, then activates the merchant.",
    params(("id" = i64, Path, description = "Merchant id")),
    responses(
        (status = 200, description = "KYC approved", body = ActionResult),
        (status = 400, description = "Invalid merchant id", body = ErrorResponse),
        (status = 500, description = "Sibling service failure", body = ErrorResponse),
    )
)]
pub async fn approve_merchant_kyc(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let id = parse_merchant_id(&id)?;
    let result = state.admin_service.approve_merchant_kyc(id).await?;
    Ok(Json(result))
}

/// `POST /admin/merchants/:id/kyc/reject` — Reject KYC via compliance.
///
/// # Errors
///
/// Returns [`AdminError`] on an invalid id or compliance failure.
#[utoipa::path(
    post,
    path = "/admin/merchants/{id}/kyc/reject",
    tag = "KYC",
    summary = "Reject merchant KYC",
    params(("id" = i64, Path, description = "Merchant id")),
    responses(
        (status = 200, description = "KYC rejected", body = ActionResult),
        (status = 400, description = "Invalid merchant id", body = ErrorResponse),
        (status = 500, description = "Compliance service failure", body = ErrorResponse),
    )
)]
pub async fn reject_merchant_kyc(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let id = parse_merchant_id(&id)?;
    let result = state.admin_service.reject_merchant_kyc(id).await?;
    Ok(Json(result))
}

/// `POST /admin/merchants/:id/kyc/enable` — Reopen the KYC flow.
///
/// # Errors
///
/// Returns [`AdminError`] on an invalid id or merchant-service failure.
#[utoipa::path(
    post,
    path = "/admin/merchants/{id}/kyc/enable",
    tag = "KYC",
    summary = "Re-enable merchant KYC",
    description = "Sets KYC status back to `pending`, then tries to reset the account status to `pending`. A failed reset is reported in `message`.",
    params(("id" = i64, Path, description = "Merchant id")),
    responses(
        (status = 200, description = "KYC flow reopened", body = ActionResult),
        (status = 400, description = "Invalid merchant id", body = ErrorResponse),
        (status = 500, description = "Merchant service failure", body = ErrorResponse),
    )
)]
pub async fn enable_merchant_kyc(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let id = parse_merchant_id(&id)?;
    let result = state.admin_service.enable_merchant_kyc(id).await?;
    Ok(Json(result))
}

/// Merchant routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/merchants", get(list_merchants))
        .route("/merchants/pending", get(list_pending_merchants))
        .route("/merchants/{id}/approve", post(approve_merchant))
        .route("/merchants/{id}/suspend", post(suspend_merchant))
        .route("/merchants/{id}/kyc/approve", post(approve_merchant_kyc))
        .route("/merchants/{id}/kyc/reject", post(reject_merchant_kyc))
        .route("/merchants/{id}/kyc/enable", post(enable_merchant_kyc))
}
