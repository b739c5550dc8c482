//! Shared query parameters and path parsing.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::AdminError;

/// Default page size for `GET /admin/transactions/fraud`.
pub const DEFAULT_FRAUD_LIMIT: i64 = 50;

/// Optional `limit` for local listings. Absent or `<= 0` uses the
/// listing's default.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitParams {
    /// Maximum number of rows.
    #[serde(default)]
    pub limit: Option<i64>,
}

impl LimitParams {
    /// The requested limit, `0` when absent.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.limit.unwrap_or(0)
    }
}

/// Query parameters for `GET /admin/transactions/fraud`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FraudListParams {
    /// Maximum number of flagged transactions. Defaults to 50.
    #[serde(default = "default_fraud_limit")]
    pub limit: i64,
}

fn default_fraud_limit() -> i64 {
    DEFAULT_FRAUD_LIMIT
}

impl FraudListParams {
    /// The limit to forward, with `<= 0` mapped to the default.
    #[must_use]
    pub const fn effective(&self) -> i64 {
        if self.limit <= 0 {
            DEFAULT_FRAUD_LIMIT
        } else {
            self.limit
        }
    }
}

/// Parses a merchant id path segment.
///
/// # Errors
///
/// Returns [`AdminError::Validation`] unless `raw` is a positive integer.
pub fn parse_merchant_id(raw: &str) -> Result<i64, AdminError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AdminError::Validation(format!("invalid merchant id: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merchant_id_must_be_positive_integer() {
        assert!(matches!(parse_merchant_id("42"), Ok(42)));
        assert!(parse_merchant_id("0").is_err());
        assert!(parse_merchant_id("-1").is_err());
        assert!(parse_merchant_id("abc").is_err());
    }

    #[test]
    fn fraud_limit_defaults_to_fifty() {
        let params: FraudListParams =
            serde_json::from_str("{}").unwrap_or(FraudListParams { limit: -1 });
        assert_eq!(params.limit, 50);
        assert_eq!(FraudListParams { limit: 0 }.effective(), 50);
        assert_eq!(FraudListParams { limit: 10 }.effective(), 10);
    }
}
