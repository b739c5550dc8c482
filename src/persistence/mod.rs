//! Persistence layer: read projections and narrow status updates over the
//! merchant/transaction schema.
//!
//! The schema (`merchants`, `transactions`, `payouts`, `merchant_balances`)
//! is owned by the merchant and transaction services; this crate treats it
//! as a fixed external contract. [`AdminStore`] is the seam the service
//! layer depends on; [`postgres::PostgresStore`] is the production
//! implementation on `sqlx::PgPool`.

pub mod models;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Merchant, MerchantStatus, PendingKycRule, StatsAggregate, TransactionRecord};
use crate::error::AdminError;

pub use postgres::PostgresStore;

/// Row limit applied to merchant listings when the caller passes `<= 0`.
pub const DEFAULT_MERCHANT_LIMIT: i64 = 200;

/// Row limit applied to transaction listings when the caller passes `<= 0`.
pub const DEFAULT_TRANSACTION_LIMIT: i64 = 100;

/// Data access used by the admin service.
///
/// Every operation is a single statement; errors are propagated as
/// [`AdminError::Database`] without retry.
#[async_trait]
pub trait AdminStore: Send + Sync + std::fmt::Debug {
    /// Lists merchants, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Database`] on query failure.
    async fn list_merchants(&self, limit: i64) -> Result<Vec<Merchant>, AdminError>;

    /// Sets a merchant's account status.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] when no row matched `id`, or
    /// [`AdminError::Database`] on query failure.
    async fn update_merchant_status(
        &self,
        id: i64,
        status: MerchantStatus,
    ) -> Result<(), AdminError>;

    /// Lists payments, newest first, tagged [`crate::domain::TransactionKind::Payment`].
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Database`] on query failure.
    async fn list_payments(&self, limit: i64) -> Result<Vec<TransactionRecord>, AdminError>;

    /// Lists payouts, newest first, tagged [`crate::domain::TransactionKind::Payout`].
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Database`] on query failure.
    async fn list_payouts(&self, limit: i64) -> Result<Vec<TransactionRecord>, AdminError>;

    /// Computes the aggregate statistics in one query.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Database`] on query failure.
    async fn stats(&self, rule: PendingKycRule) -> Result<StatsAggregate, AdminError>;

    /// Sum of pending merchant balances in `currency`, minor units.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Database`] on query failure.
    async fn pending_settlement_total(&self, currency: &str) -> Result<i64, AdminError>;
}

/// Returns `limit`, or `default` when `limit <= 0`.
#[must_use]
pub const fn effective_limit(limit: i64, default: i64) -> i64 {
    if limit <= 0 { default } else { limit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_limit_uses_default() {
        assert_eq!(effective_limit(0, DEFAULT_MERCHANT_LIMIT), 200);
        assert_eq!(effective_limit(-5, DEFAULT_TRANSACTION_LIMIT), 100);
        assert_eq!(effective_limit(25, DEFAULT_TRANSACTION_LIMIT), 25);
    }
}
