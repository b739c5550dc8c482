//! Settlement service client: on-demand settlement runs.

use serde::Serialize;

use super::Upstream;
use super::http::send;
use crate::error::AdminError;

#[derive(Debug, Serialize)]
struct TriggerBody<'a> {
    merchant_id: i64,
    currency: &'a str,
}

/// HTTP client for the settlement service.
#[derive(Debug, Clone)]
pub struct SettlementClient {
    http: reqwest::Client,
    base_url: String,
}

impl SettlementClient {
    /// Creates a client against `base_url` (no trailing slash).
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// `POST /settlements/trigger`
    ///
    /// # Errors
    ///
    /// Returns a transport or upstream-status [`AdminError`].
    pub async fn trigger(&self, merchant_id: i64, currency: &str) -> Result<(), AdminError> {
        let url = format!("{}/settlements/trigger", self.base_url);
        let request = self.http.post(url).json(&TriggerBody {
            merchant_id,
            currency,
        });
        send(Upstream::Settlement, request).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn trigger_posts_merchant_and_currency() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/settlements/trigger"))
            .and(body_json(serde_json::json!({"merchant_id": 9, "currency": "USD"})))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = SettlementClient::new(reqwest::Client::new(), &server.uri());
        assert!(client.trigger(9, "USD").await.is_ok());
    }

    #[tokio::test]
    async fn conflict_is_reported_with_remote_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/settlements/trigger"))
            .respond_with(ResponseTemplate::new(409).set_body_string("run in progress"))
            .mount(&server)
            .await;

        let client = SettlementClient::new(reqwest::Client::new(), &server.uri());
        let Err(AdminError::UpstreamStatus { service, status, body }) =
            client.trigger(9, "NGN").await
        else {
            panic!("expected upstream status error");
        };
        assert_eq!(service, Upstream::Settlement);
        assert_eq!(status, 409);
        assert_eq!(body, "run in progress");
    }
}
