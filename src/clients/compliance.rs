//! Compliance service client: recording KYC review decisions.

use serde::Serialize;

use super::Upstream;
use super::http::send;
use crate::domain::KycStatus;
use crate::error::AdminError;

/// A KYC review decision as posted to `POST /kyc/update`.
///
/// The compliance service syncs the resulting KYC status back to the
/// merchant service on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KycDecision {
    /// Merchant under review.
    pub merchant_id: i64,
    /// Decision: [`KycStatus::Approved`] or [`KycStatus::Rejected`].
    pub status: KycStatus,
    /// Operator recording the decision.
    pub reviewer_id: i64,
    /// Free-form review notes.
    pub review_notes: String,
}

impl KycDecision {
    /// Approval recorded by `reviewer_id`.
    #[must_use]
    pub fn approve(merchant_id: i64, reviewer_id: i64) -> Self {
        Self {
            merchant_id,
            status: KycStatus::Approved,
            reviewer_id,
            review_notes: "Approved by admin".to_string(),
        }
    }

    /// Rejection recorded by `reviewer_id`.
    #[must_use]
    pub fn reject(merchant_id: i64, reviewer_id: i64) -> Self {
        Self {
            merchant_id,
            status: KycStatus::Rejected,
            reviewer_id,
            review_notes: "Rejected by admin".to_string(),
        }
    }
}

/// HTTP client for the compliance service.
#[derive(Debug, Clone)]
pub struct ComplianceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ComplianceClient {
    /// Creates a client against `base_url` (no trailing slash).
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// `POST /kyc/update`
    ///
    /// # Errors
    ///
    /// Returns a transport or upstream-status [`AdminError`].
    pub async fn update_kyc(&self, decision: &KycDecision) -> Result<(), AdminError> {
        let url = format!("{}/kyc/update", self.base_url);
        let request = self.http.post(url).json(decision);
        send(Upstream::Compliance, request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn decision_is_posted_with_reviewer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/kyc/update"))
            .and(body_json(serde_json::json!({
                "merchant_id": 42,
                "status": "rejected",
                "reviewer_id": 101,
                "review_notes": "Rejected by admin"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ComplianceClient::new(reqwest::Client::new(), &server.uri());
        let result = client.update_kyc(&KycDecision::reject(42, 101)).await;
        assert!(result.is_ok());
    }
}
