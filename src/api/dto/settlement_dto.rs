//! Settlement request DTOs.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Request body for `POST /admin/settlements/trigger`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TriggerSettlementRequest {
    /// Merchant to settle. Must be positive.
    #[serde(default)]
    pub merchant_id: i64,
    /// ISO currency code. Defaults to `NGN`.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Query parameters for `GET /admin/settlements/pending`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PendingSettlementParams {
    /// ISO currency code. Defaults to `NGN`.
    #[serde(default)]
    pub currency: Option<String>,
}
