//! Database row models and their conversion into domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::{Merchant, StatsAggregate, TransactionKind, TransactionRecord};

/// A merchant row joined with its successful payment volume.
#[derive(Debug, Clone, FromRow)]
pub struct MerchantRow {
    /// Primary key.
    pub id: i64,
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Registered business name.
    pub business_name: Option<String>,
    /// ISO country code.
    pub country: Option<String>,
    /// Account status.
    pub status: String,
    /// KYC status.
    pub kyc_status: String,
    /// Successful payment volume, minor units.
    pub total_volume: i64,
    /// Settlement currency.
    pub currency: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<MerchantRow> for Merchant {
    fn from(row: MerchantRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            business_name: row.business_name,
            country: row.country,
            status: row.status,
            kyc_status: row.kyc_status,
            total_volume: row.total_volume,
            currency: row.currency,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A payment or payout row projected onto the shared feed columns.
#[derive(Debug, Clone, FromRow)]
pub struct FeedRow {
    /// Primary key within its table.
    pub id: i64,
    /// External reference.
    pub reference: String,
    /// Owning merchant.
    pub merchant_id: i64,
    /// Owning merchant's business name.
    pub merchant_name: Option<String>,
    /// Customer email (NULL for payouts).
    pub customer_email: Option<String>,
    /// Customer name (NULL for payouts).
    pub customer_name: Option<String>,
    /// Amount, minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Status column.
    pub status: String,
    /// Payment method or payout channel.
    pub payment_method: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl FeedRow {
    /// Tags the row with its kind.
    #[must_use]
    pub fn into_record(self, kind: TransactionKind) -> TransactionRecord {
        TransactionRecord {
            id: self.id,
            reference: self.reference,
            merchant_id: self.merchant_id,
            merchant_name: self.merchant_name,
            customer_email: self.customer_email,
            customer_name: self.customer_name,
            amount: self.amount,
            currency: self.currency,
            status: self.status,
            payment_method: self.payment_method,
            created_at: self.created_at,
            kind,
        }
    }
}

/// The seven aggregate columns of the stats query.
#[derive(Debug, Clone, FromRow)]
pub struct StatsRow {
    /// `COUNT(*)` over merchants.
    pub total_merchants: i64,
    /// Active merchants.
    pub active_merchants: i64,
    /// Merchants matching the pending-KYC rule.
    pub pending_kyc: i64,
    /// `COUNT(*)` over payments.
    pub total_transactions: i64,
    /// Successful volume, minor units.
    pub total_volume: i64,
    /// Successful volume this month, minor units.
    pub monthly_volume: i64,
    /// NULL when there are no payments.
    pub success_rate: Option<f64>,
}

impl From<StatsRow> for StatsAggregate {
    fn from(row: StatsRow) -> Self {
        Self {
            total_merchants: row.total_merchants,
            active_merchants: row.active_merchants,
            pending_kyc: row.pending_kyc,
            total_transactions: row.total_transactions,
            total_volume: row.total_volume,
            monthly_volume: row.monthly_volume,
            success_rate: row.success_rate,
        }
    }
}
