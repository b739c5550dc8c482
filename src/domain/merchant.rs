//! Merchant projection and the status vocabularies owned by the merchant
//! service.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account status of a merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MerchantStatus {
    /// Signed up, waiting for review.
    Pending,
    /// Allowed to transact.
    Active,
    /// Blocked by an operator.
    Suspended,
    /// Dormant or never activated.
    Inactive,
}

impl MerchantStatus {
    /// Wire and column representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Inactive => "inactive",
        }
    }
}

/// KYC verification status of a merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    /// Merchant has not submitted documents yet.
    NotStarted,
    /// Documents submitted, awaiting review.
    Pending,
    /// Marked complete by an operator.
    Completed,
    /// Approved by compliance.
    Approved,
    /// Rejected by compliance.
    Rejected,
}

impl KycStatus {
    /// Wire and column representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for MerchantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flattened merchant row as listed to operators.
///
/// `status` and `kyc_status` are kept as the raw column values: the
/// merchant service owns these vocabularies and may extend them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Merchant {
    /// Merchant id.
    pub id: i64,
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Registered business name.
    pub business_name: Option<String>,
    /// ISO country code.
    pub country: Option<String>,
    /// Account status (see [`MerchantStatus`]).
    pub status: String,
    /// KYC status (see [`KycStatus`]).
    pub kyc_status: String,
    /// Sum of successful payment amounts, in minor units.
    pub total_volume: i64,
    /// Settlement currency.
    pub currency: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
