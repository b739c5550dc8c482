//! REST API layer: route handlers, DTOs, OpenAPI document and router
//! composition.
//!
//! Admin endpoints are mounted under `/admin`; `/health` sits at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use axum::http::HeaderName;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/admin", handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the servable application: routes, middleware and state.
///
/// Layers, outermost first: request-id assignment, tracing, CORS,
/// request-id propagation to the response.
pub fn build_app(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}
