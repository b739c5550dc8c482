//! Aggregate statistics computed on read.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Business rule deciding which merchants count as "pending KYC".
///
/// Product has not settled on one definition, so the rule is chosen by
/// configuration rather than hard-coded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PendingKycRule {
    /// `kyc_status = 'pending'`.
    #[default]
    Pending,
    /// `kyc_status IN ('pending', 'not_started') OR status = 'inactive'`.
    PendingOrNotStarted,
}

impl PendingKycRule {
    /// SQL predicate over the `merchants` table for this rule.
    #[must_use]
    pub const fn sql_predicate(self) -> &'static str {
        match self {
            Self::Pending => "kyc_status = 'pending'",
            Self::PendingOrNotStarted => {
                "kyc_status IN ('pending', 'not_started') OR status = 'inactive'"
            }
        }
    }
}

impl fmt::Display for PendingKycRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::PendingOrNotStarted => f.write_str("pending_or_not_started"),
        }
    }
}

impl FromStr for PendingKycRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(Self::Pending),
            "pending_or_not_started" => Ok(Self::PendingOrNotStarted),
            other => Err(format!("unknown pending KYC rule: {other}")),
        }
    }
}

/// Raw aggregate columns as computed by the store.
///
/// `success_rate` is `None` when there are no transactions at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsAggregate {
    /// Number of merchants.
    pub total_merchants: i64,
    /// Merchants with status `active`.
    pub active_merchants: i64,
    /// Merchants matching the configured [`PendingKycRule`].
    pub pending_kyc: i64,
    /// Number of payments.
    pub total_transactions: i64,
    /// Sum of successful payments, minor units.
    pub total_volume: i64,
    /// Sum of successful payments this calendar month, minor units.
    pub monthly_volume: i64,
    /// Percentage of successful payments, when any exist.
    pub success_rate: Option<f64>,
}

/// Statistics snapshot returned by `GET /admin/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatsSnapshot {
    /// Number of merchants.
    pub total_merchants: i64,
    /// Merchants with status `active`.
    pub active_merchants: i64,
    /// Merchants awaiting KYC review.
    pub pending_kyc: i64,
    /// Number of payments.
    pub total_transactions: i64,
    /// Sum of successful payments, minor units.
    pub total_volume: i64,
    /// Sum of successful payments this calendar month, minor units.
    pub monthly_volume: i64,
    /// Percentage of successful payments (0.0 when there are none).
    pub success_rate: f64,
    /// When the snapshot was computed.
    pub computed_at: DateTime<Utc>,
}

impl StatsSnapshot {
    /// Builds a snapshot from store aggregates.
    #[must_use]
    pub fn from_aggregate(aggregate: StatsAggregate, computed_at: DateTime<Utc>) -> Self {
        Self {
            total_merchants: aggregate.total_merchants,
            active_merchants: aggregate.active_merchants,
            pending_kyc: aggregate.pending_kyc,
            total_transactions: aggregate.total_transactions,
            total_volume: aggregate.total_volume,
            monthly_volume: aggregate.monthly_volume,
            success_rate: aggregate.success_rate.unwrap_or(0.0),
            computed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_transaction_set_reports_zero_success_rate() {
        let aggregate = StatsAggregate {
            total_merchants: 3,
            active_merchants: 1,
            ..StatsAggregate::default()
        };
        let snapshot = StatsSnapshot::from_aggregate(aggregate, Utc::now());
        assert_eq!(snapshot.success_rate, 0.0);
        assert_eq!(snapshot.total_transactions, 0);
        assert_eq!(snapshot.total_merchants, 3);
    }

    #[test]
    fn success_rate_is_passed_through() {
        let aggregate = StatsAggregate {
            total_transactions: 4,
            success_rate: Some(75.0),
            ..StatsAggregate::default()
        };
        let snapshot = StatsSnapshot::from_aggregate(aggregate, Utc::now());
        assert_eq!(snapshot.success_rate, 75.0);
    }

    #[test]
    fn rule_parses_from_config_values() {
        assert_eq!("pending".parse(), Ok(PendingKycRule::Pending));
        assert_eq!(
            " pending_or_not_started ".parse(),
            Ok(PendingKycRule::PendingOrNotStarted)
        );
        assert!("everything".parse::<PendingKycRule>().is_err());
        assert!(PendingKycRule::PendingOrNotStarted
            .sql_predicate()
            .contains("not_started"));
    }
}
