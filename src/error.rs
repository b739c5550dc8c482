//! Admin error types with HTTP status code mapping.
//!
//! [`AdminError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and a JSON error envelope whose
//! `message` is the single human-readable string shown to operators.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::clients::Upstream;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 3102,
///     "message": "merchant service returned status 503: unavailable"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see ranges on [`AdminError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category              | HTTP Status               |
/// |-----------|-----------------------|---------------------------|
/// | 1000–1999 | Validation / Rejected | 400 Bad Request           |
/// | 2000–2999 | Not Found             | 404 Not Found             |
/// | 3000–3099 | Local failures        | 500 Internal Server Error |
/// | 3100–3199 | Sibling services      | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// Request validation failed (bad id, reference or body).
    #[error("invalid request: {0}")]
    Validation(String),

    /// The targeted record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A sibling service refused a state change requested by the operator.
    #[error("rejected: {0}")]
    Rejected(String),

    /// The sibling service could not be reached.
    #[error("failed to call {service}: {message}")]
    Transport {
        /// Service that was being called.
        service: Upstream,
        /// Underlying transport error.
        message: String,
    },

    /// The sibling service answered outside the 2xx range.
    #[error("{service} returned status {status}: {body}")]
    UpstreamStatus {
        /// Service that answered.
        service: Upstream,
        /// Remote HTTP status code.
        status: u16,
        /// Remote response body, verbatim.
        body: String,
    },

    /// The sibling service answered 2xx with a body we could not decode.
    #[error("failed to decode response from {service}: {message}")]
    Decode {
        /// Service that answered.
        service: Upstream,
        /// Decoder error.
        message: String,
    },

    /// Database connectivity or query failure.
    #[error("database error: {0}")]
    Database(String),

    /// A multi-step workflow failed after earlier steps were committed.
    ///
    /// Committed steps are not rolled back.
    #[error(
        "{workflow}: step `{failed}` failed after [{}] committed: {source}",
        .completed.join(", ")
    )]
    PartialFailure {
        /// Workflow name, e.g. `approve_merchant`.
        workflow: &'static str,
        /// Steps that already took effect, in order.
        completed: Vec<&'static str>,
        /// Step that failed.
        failed: &'static str,
        /// Error returned by the failed step.
        source: Box<AdminError>,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AdminError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::Rejected(_) => 1002,
            Self::NotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::Database(_) => 3001,
            Self::PartialFailure { .. } => 3002,
            Self::Transport { .. } => 3101,
            Self::UpstreamStatus { .. } => 3102,
            Self::Decode { .. } => 3103,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Transport { .. }
            | Self::UpstreamStatus { .. }
            | Self::Decode { .. }
            | Self::Database(_)
            | Self::PartialFailure { .. }
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Reclassifies a 4xx answer from a sibling service as [`AdminError::Rejected`].
    ///
    /// Used for operator actions on records owned elsewhere (transaction
    /// approval, settlement trigger) where a 4xx means the request itself
    /// was refused. Everything else is returned unchanged.
    #[must_use]
    pub fn into_rejection(self) -> Self {
        if let Self::UpstreamStatus { status, .. } = &self {
            if (400..500).contains(status) {
                return Self::Rejected(self.to_string());
            }
        }
        self
    }
}

impl From<JsonRejection> for AdminError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AdminError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_4xx_becomes_rejection() {
        let err = AdminError::UpstreamStatus {
            service: Upstream::Transaction,
            status: 404,
            body: "transaction not found".to_string(),
        }
        .into_rejection();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("transaction service returned status 404"));
    }

    #[test]
    fn upstream_5xx_stays_internal() {
        let err = AdminError::UpstreamStatus {
            service: Upstream::Settlement,
            status: 502,
            body: String::new(),
        }
        .into_rejection();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), 3102);
    }

    #[test]
    fn partial_failure_names_committed_steps() {
        let err = AdminError::PartialFailure {
            workflow: "approve_merchant",
            completed: vec!["kyc_completed"],
            failed: "activate_merchant",
            source: Box::new(AdminError::UpstreamStatus {
                service: Upstream::Merchant,
                status: 500,
                body: "boom".to_string(),
            }),
        };
        assert_eq!(
            err.to_string(),
            "approve_merchant: step `activate_merchant` failed after [kyc_completed] committed: \
             merchant service returned status 500: boom"
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
