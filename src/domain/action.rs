//! Uniform result of a state-changing admin action.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome status reported for a merchant action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    /// Merchant approved and activated.
    Active,
    /// Merchant suspended.
    Suspended,
    /// KYC approved by compliance and merchant activated.
    Approved,
    /// KYC rejected by compliance.
    Rejected,
    /// KYC flow reopened for the merchant.
    Enabled,
}

/// `{id, status, message?}` returned by every merchant action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionResult {
    /// Merchant id the action applied to.
    pub id: i64,
    /// Resulting status.
    pub status: ActionStatus,
    /// Extra detail, e.g. a best-effort step that did not go through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResult {
    /// Result with no message.
    #[must_use]
    pub const fn new(id: i64, status: ActionStatus) -> Self {
        Self {
            id,
            status,
            message: None,
        }
    }

    /// Attaches a message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
