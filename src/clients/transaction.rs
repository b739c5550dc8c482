//! Transaction service client: flagged transactions and status review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Upstream;
use super::http::{decode, send};
use crate::domain::review_reference;
use crate::error::AdminError;

/// Status the transaction service uses for suspected fraud.
pub const PENDING_REVIEW: &str = "pending_review";

/// A transaction held for manual review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FlaggedTransaction {
    /// Row id.
    #[serde(default)]
    pub id: Option<i64>,
    /// External reference, used to approve or decline.
    pub reference: String,
    /// Owning merchant.
    #[serde(default)]
    pub merchant_id: Option<i64>,
    /// Amount in minor units.
    #[serde(default)]
    pub amount: i64,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: Option<String>,
    /// Payment method.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Paying customer's email.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Page of transactions returned by `GET /transactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionListResponse {
    /// Transactions in this page.
    #[serde(default)]
    pub transactions: Vec<FlaggedTransaction>,
    /// Total matching transactions, as reported upstream.
    #[serde(default)]
    pub total: i64,
}

#[derive(Debug, Serialize)]
struct StatusBody<'a> {
    status: &'a str,
}

/// HTTP client for the transaction service.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransactionClient {
    /// Creates a client against `base_url` (no trailing slash).
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// `GET /transactions?status=pending_review&limit=N`
    ///
    /// # Errors
    ///
    /// Returns a transport, upstream-status or decode [`AdminError`].
    pub async fn list_flagged(&self, limit: i64) -> Result<TransactionListResponse, AdminError> {
        let url = format!("{}/transactions", self.base_url);
        let request = self
            .http
            .get(url)
            .query(&[("status", PENDING_REVIEW.to_string()), ("limit", limit.to_string())]);

        let response = send(Upstream::Transaction, request).await?;
        decode(Upstream::Transaction, response).await
    }

    /// `PUT /transactions/{reference}/status`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank or dot-segment
    /// reference, a transport or upstream-status [`AdminError`], or
    /// [`AdminError::Internal`] if the configured base URL is unusable.
    pub async fn update_status(&self, reference: &str, status: &str) -> Result<(), AdminError> {
        let url = self.status_url(reference)?;
        let request = self.http.put(url).json(&StatusBody { status });
        send(Upstream::Transaction, request).await?;
        Ok(())
    }

    /// Builds the status URL with `reference` percent-encoded as one segment.
    fn status_url(&self, reference: &str) -> Result<reqwest::Url, AdminError> {
        let reference = review_reference(reference)?;
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| AdminError::Internal(format!("invalid transaction service url: {e}")))?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                AdminError::Internal("transaction service url cannot be a base".to_string())
            })?;
            segments
                .pop_if_empty()
                .extend(["transactions", reference, "status"]);
        }
        Ok(url)
    }
}
