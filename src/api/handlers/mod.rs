//! REST endpoint handlers organized by resource.

pub mod merchant;
pub mod settlement;
pub mod stats;
pub mod system;
pub mod transaction;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/admin`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(merchant::routes())
        .merge(transaction::routes())
        .merge(settlement::routes())
        .merge(stats::routes())
}
