//! Aggregate statistics handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::StatsSnapshot;
use crate::error::{AdminError, ErrorResponse};

/// `GET /admin/stats` — Platform statistics snapshot.
///
/// # Errors
///
/// Returns [`AdminError`] on database failure.
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "Stats",
    summary = "Aggregate statistics",
    description = "Merchant counts, pending KYC, volumes (minor units) and payment success rate. `success_rate` is 0.0 when there are no transactions.",
    responses(
        (status = 200, description = "Stats snapshot", body = StatsSnapshot),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, AdminError> {
    let snapshot = state.admin_service.stats().await?;
    Ok(Json(snapshot))
}

/// Stats routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}
