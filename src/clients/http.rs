//! Request execution and response classification shared by all clients.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::Upstream;
use crate::error::AdminError;

/// Sends `request` and fails on transport errors or non-2xx statuses.
///
/// The remote body is kept verbatim in [`AdminError::UpstreamStatus`].
pub(crate) async fn send(service: Upstream, request: RequestBuilder) -> Result<Response, AdminError> {
    let response = request.send().await.map_err(|e| AdminError::Transport {
        service,
        message: e.to_string(),
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%service, status = status.as_u16(), %body, "upstream returned error status");
    Err(AdminError::UpstreamStatus {
        service,
        status: status.as_u16(),
        body,
    })
}

/// Reads and decodes a JSON body.
///
/// A failure to read the body is a transport error; a body that is not the
/// expected JSON is a decode error.
pub(crate) async fn decode<T: DeserializeOwned>(
    service: Upstream,
    response: Response,
) -> Result<T, AdminError> {
    let bytes = response.bytes().await.map_err(|e| AdminError::Transport {
        service,
        message: e.to_string(),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| AdminError::Decode {
        service,
        message: e.to_string(),
    })
}
