//! Unified transaction feed: payments and payouts in one ordered list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AdminError;

/// Discriminator for the two record kinds merged into the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Customer payment into a merchant account.
    Payment,
    /// Payout from a merchant balance to a bank account.
    Payout,
}

/// One entry of the transaction feed.
///
/// `amount` is always in integer minor units, exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionRecord {
    /// Row id within its own table (payments and payouts may collide).
    pub id: i64,
    /// Unique external reference.
    pub reference: String,
    /// Owning merchant.
    pub merchant_id: i64,
    /// Business name of the owning merchant.
    pub merchant_name: Option<String>,
    /// Paying customer's email (payments only).
    pub customer_email: Option<String>,
    /// Paying customer's name (payments only).
    pub customer_name: Option<String>,
    /// Amount in minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Status as reported by the transaction service.
    pub status: String,
    /// Payment method or payout channel.
    pub payment_method: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Payment or payout.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Operator decision on a transaction held for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Release the transaction.
    Approve,
    /// Refuse the transaction.
    Decline,
}

impl ReviewDecision {
    /// Status the transaction service should move the transaction to.
    #[must_use]
    pub const fn target_status(self) -> &'static str {
        match self {
            Self::Approve => "successful",
            Self::Decline => "failed",
        }
    }
}

/// Trims and checks a transaction reference taken from a request path.
///
/// The reference becomes one segment of the transaction service URL, so it
/// must not be blank or a dot segment (`.`, `..`, or their `%2e` forms):
/// URL builders drop those instead of encoding them, which would address a
/// different upstream route.
///
/// # Errors
///
/// Returns [`AdminError::Validation`] for a blank or dot-segment reference.
pub fn review_reference(raw: &str) -> Result<&str, AdminError> {
    let reference = raw.trim();
    if reference.is_empty() {
        return Err(AdminError::Validation("reference is required".to_string()));
    }
    let decoded = reference.to_ascii_lowercase().replace("%2e", ".");
    if decoded == "." || decoded == ".." {
        return Err(AdminError::Validation(format!(
            "invalid transaction reference: {reference}"
        )));
    }
    Ok(reference)
}

/// Merges payments and payouts into one feed, newest first, truncated to
/// `limit` entries.
///
/// Ties on `created_at` keep payments ahead of payouts and otherwise keep
/// the input order.
#[must_use]
pub fn merge_transaction_feed(
    payments: Vec<TransactionRecord>,
    payouts: Vec<TransactionRecord>,
    limit: usize,
) -> Vec<TransactionRecord> {
    let mut feed = payments;
    feed.extend(payouts);
    feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    feed.truncate(limit);
    feed
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: i64, kind: TransactionKind, minute: u32) -> TransactionRecord {
        let Some(created_at) = Utc.with_ymd_and_hms(2025, 3, 1, 12, minute, 0).single() else {
            panic!("valid timestamp");
        };
        TransactionRecord {
            id,
            reference: format!("REF-{id}"),
            merchant_id: 7,
            merchant_name: Some("Acme Ltd".to_string()),
            customer_email: None,
            customer_name: None,
            amount: 150_000,
            currency: "NGN".to_string(),
            status: "successful".to_string(),
            payment_method: Some("card".to_string()),
            created_at,
            kind,
        }
    }

    #[test]
    fn feed_is_newest_first_across_kinds() {
        let payments = vec![
            record(1, TransactionKind::Payment, 30),
            record(2, TransactionKind::Payment, 10),
        ];
        let payouts = vec![
            record(1, TransactionKind::Payout, 20),
            record(2, TransactionKind::Payout, 40),
        ];

        let feed = merge_transaction_feed(payments, payouts, 100);
        let order: Vec<(i64, TransactionKind)> = feed.iter().map(|t| (t.id, t.kind)).collect();
        assert_eq!(
            order,
            vec![
                (2, TransactionKind::Payout),
                (1, TransactionKind::Payment),
                (1, TransactionKind::Payout),
                (2, TransactionKind::Payment),
            ]
        );
    }

    #[test]
    fn feed_is_truncated_after_merge() {
        let payments = vec![record(1, TransactionKind::Payment, 5)];
        let payouts = vec![
            record(1, TransactionKind::Payout, 50),
            record(2, TransactionKind::Payout, 45),
        ];

        let feed = merge_transaction_feed(payments, payouts, 2);
        assert_eq!(feed.len(), 2);
        assert!(feed.iter().all(|t| t.kind == TransactionKind::Payout));
    }

    #[test]
    fn dot_segment_references_are_rejected() {
        for raw in ["", "   ", ".", "..", " .. ", "%2E%2E", "%2e.", "%2E"] {
            assert!(
                matches!(review_reference(raw), Err(AdminError::Validation(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn ordinary_references_are_trimmed() {
        assert!(matches!(review_reference(" TXN-001 "), Ok("TXN-001")));
        assert!(matches!(review_reference("..TXN"), Ok("..TXN")));
        assert!(matches!(review_reference("a/b"), Ok("a/b")));
    }

    #[test]
    fn kind_serializes_as_type_field() {
        let json = serde_json::to_value(record(9, TransactionKind::Payout, 0));
        let Ok(json) = json else {
            panic!("serializable");
        };
        assert_eq!(json.get("type"), Some(&serde_json::json!("payout")));
        assert_eq!(json.get("amount"), Some(&serde_json::json!(150_000)));
    }
}
