//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::AdminService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Admin service for all business logic.
    pub admin_service: Arc<AdminService>,
    /// Service name reported by `/health`.
    pub service_name: Arc<str>,
}
