//! Merchant service client: KYC queue, KYC status and account status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Upstream;
use super::http::{decode, send};
use crate::domain::{KycStatus, MerchantStatus};
use crate::error::AdminError;

/// A merchant as listed by the merchant service's KYC queue.
///
/// This is a fixed projection, not a verbatim pass-through: the declared
/// fields are kept when present and any other field is dropped. `id` is
/// required, so a queue entry without one fails the whole listing with
/// [`AdminError::Decode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KycQueueEntry {
    /// Merchant id.
    pub id: i64,
    /// Contact name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Registered business name.
    #[serde(default)]
    pub business_name: Option<String>,
    /// ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Account status.
    #[serde(default)]
    pub status: Option<String>,
    /// KYC status.
    #[serde(default)]
    pub kyc_status: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct KycStatusBody {
    kyc_status: KycStatus,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: MerchantStatus,
}

/// HTTP client for the merchant service.
#[derive(Debug, Clone)]
pub struct MerchantClient {
    http: reqwest::Client,
    base_url: String,
}

impl MerchantClient {
    /// Creates a client against `base_url` (no trailing slash).
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// `GET /merchants/kyc?kyc_status=…`
    ///
    /// # Errors
    ///
    /// Returns a transport, upstream-status or decode [`AdminError`].
    pub async fn list_by_kyc_status(
        &self,
        kyc_status: KycStatus,
    ) -> Result<Vec<KycQueueEntry>, AdminError> {
        let url = format!("{}/merchants/kyc", self.base_url);
        let request = self
            .http
            .get(url)
            .query(&[("kyc_status", kyc_status.as_str())]);

        let response = send(Upstream::Merchant, request).await?;
        decode(Upstream::Merchant, response).await
    }

    /// `PUT /merchants/{id}/kyc-status`
    ///
    /// # Errors
    ///
    /// Returns a transport or upstream-status [`AdminError`].
    pub async fn update_kyc_status(&self, id: i64, kyc_status: KycStatus) -> Result<(), AdminError> {
        let url = format!("{}/merchants/{id}/kyc-status", self.base_url);
        let request = self.http.put(url).json(&KycStatusBody { kyc_status });
        send(Upstream::Merchant, request).await?;
        Ok(())
    }

    /// `PUT /merchants/{id}/status`
    ///
    /// # Errors
    ///
    /// Returns a transport or upstream-status [`AdminError`].
    pub async fn update_status(&self, id: i64, status: MerchantStatus) -> Result<(), AdminError> {
        let url = format!("{}/merchants/{id}/status", self.base_url);
        let request = self.http.put(url).json(&StatusBody { status });
        send(Upstream::Merchant, request).await?;
        Ok(())
    }
}
