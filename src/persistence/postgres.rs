//! PostgreSQL implementation of the persistence layer.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::{FeedRow, MerchantRow, StatsRow};
use super::{AdminStore, DEFAULT_MERCHANT_LIMIT, DEFAULT_TRANSACTION_LIMIT, effective_limit};
use crate::config::AdminConfig;
use crate::domain::{
    Merchant, MerchantStatus, PendingKycRule, StatsAggregate, TransactionKind, TransactionRecord,
};
use crate::error::AdminError;

const LIST_MERCHANTS_SQL: &str = "\
    SELECT m.id::BIGINT AS id, m.name, m.email, m.business_name, m.country, \
           m.status, m.kyc_status, \
           COALESCE(SUM(t.amount) FILTER (WHERE t.status = 'successful'), 0)::BIGINT AS total_volume, \
           COALESCE(m.currency, 'NGN') AS currency, \
           m.created_at::TIMESTAMPTZ AS created_at, m.updated_at::TIMESTAMPTZ AS updated_at \
    FROM merchants m \
    LEFT JOIN transactions t ON t.merchant_id = m.id \
    GROUP BY m.id \
    ORDER BY m.created_at DESC \
    LIMIT $1";

const LIST_PAYMENTS_SQL: &str = "\
    SELECT t.id::BIGINT AS id, t.reference, t.merchant_id::BIGINT AS merchant_id, \
           m.business_name AS merchant_name, t.customer_email, t.customer_name, \
           t.amount::BIGINT AS amount, t.currency, t.status, t.payment_method, \
           t.created_at::TIMESTAMPTZ AS created_at \
    FROM transactions t \
    JOIN merchants m ON m.id = t.merchant_id \
    ORDER BY t.created_at DESC \
    LIMIT $1";

const LIST_PAYOUTS_SQL: &str = "\
    SELECT p.id::BIGINT AS id, p.reference, p.merchant_id::BIGINT AS merchant_id, \
           m.business_name AS merchant_name, NULL::TEXT AS customer_email, \
           NULL::TEXT AS customer_name, p.amount::BIGINT AS amount, p.currency, p.status, \
           'bank_transfer'::TEXT AS payment_method, p.created_at::TIMESTAMPTZ AS created_at \
    FROM payouts p \
    JOIN merchants m ON m.id = p.merchant_id \
    ORDER BY p.created_at DESC \
    LIMIT $1";

const UPDATE_MERCHANT_STATUS_SQL: &str =
    "UPDATE merchants SET status = $2, updated_at = NOW() WHERE id = $1";

const PENDING_SETTLEMENT_SQL: &str = "\
    SELECT COALESCE(SUM(pending_balance), 0)::BIGINT \
    FROM merchant_balances WHERE currency = $1";

/// Builds the stats query for the given pending-KYC rule.
///
/// The predicate is a compile-time constant, never caller input.
fn stats_sql(rule: PendingKycRule) -> String {
    format!(
        "SELECT \
            (SELECT COUNT(*) FROM merchants) AS total_merchants, \
            (SELECT COUNT(*) FROM merchants WHERE status = 'active') AS active_merchants, \
            (SELECT COUNT(*) FROM merchants WHERE {pending}) AS pending_kyc, \
            COUNT(t.id) AS total_transactions, \
            COALESCE(SUM(t.amount) FILTER (WHERE t.status = 'successful'), 0)::BIGINT AS total_volume, \
            COALESCE(SUM(t.amount) FILTER (WHERE t.status = 'successful' \
                AND t.created_at >= date_trunc('month', NOW())), 0)::BIGINT AS monthly_volume, \
            ROUND(100.0 * COUNT(t.id) FILTER (WHERE t.status = 'successful') \
                / NULLIF(COUNT(t.id), 0), 2)::FLOAT8 AS success_rate \
         FROM transactions t",
        pending = rule.sql_predicate()
    )
}

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a bounded connection pool from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`AdminError::Database`] if the initial connection fails.
    pub async fn connect(config: &AdminConfig) -> Result<Self, AdminError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .max_lifetime(config.database_max_lifetime())
            .acquire_timeout(config.database_connect_timeout())
            .connect(&config.database_url)
            .await
            .map_err(|e| AdminError::Database(e.to_string()))?;

        Ok(Self::new(pool))
    }

    async fn list_feed(
        &self,
        sql: &str,
        limit: i64,
        kind: TransactionKind,
    ) -> Result<Vec<TransactionRecord>, AdminError> {
        let rows = sqlx::query_as::<_, FeedRow>(sql)
            .bind(effective_limit(limit, DEFAULT_TRANSACTION_LIMIT))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AdminError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.into_record(kind)).collect())
    }
}

#[async_trait]
impl AdminStore for PostgresStore {
    async fn list_merchants(&self, limit: i64) -> Result<Vec<Merchant>, AdminError> {
        let rows = sqlx::query_as::<_, MerchantRow>(LIST_MERCHANTS_SQL)
            .bind(effective_limit(limit, DEFAULT_MERCHANT_LIMIT))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AdminError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Merchant::from).collect())
    }

    async fn update_merchant_status(
        &self,
        id: i64,
        status: MerchantStatus,
    ) -> Result<(), AdminError> {
        let result = sqlx::query(UPDATE_MERCHANT_STATUS_SQL)
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AdminError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AdminError::NotFound(format!("merchant {id}")));
        }
        Ok(())
    }

    async fn list_payments(&self, limit: i64) -> Result<Vec<TransactionRecord>, AdminError> {
        self.list_feed(LIST_PAYMENTS_SQL, limit, TransactionKind::Payment)
            .await
    }

    async fn list_payouts(&self, limit: i64) -> Result<Vec<TransactionRecord>, AdminError> {
        self.list_feed(LIST_PAYOUTS_SQL, limit, TransactionKind::Payout)
            .await
    }

    async fn stats(&self, rule: PendingKycRule) -> Result<StatsAggregate, AdminError> {
        let sql = stats_sql(rule);
        let row = sqlx::query_as::<_, StatsRow>(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AdminError::Database(e.to_string()))?;

        Ok(row.into())
    }

    async fn pending_settlement_total(&self, currency: &str) -> Result<i64, AdminError> {
        sqlx::query_scalar::<_, i64>(PENDING_SETTLEMENT_SQL)
            .bind(currency)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AdminError::Database(e.to_string()))
    }
}
