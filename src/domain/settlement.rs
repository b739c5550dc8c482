//! Settlement views and the validated trigger request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AdminError;

/// Currency used when a settlement request does not name one.
pub const DEFAULT_CURRENCY: &str = "NGN";

/// Sum of balances awaiting settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PendingSettlements {
    /// Total pending balance, minor units.
    pub total_pending: i64,
    /// Currency of `total_pending`.
    pub currency: String,
}

/// A validated request to settle one merchant's balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementTrigger {
    /// Merchant to settle; always positive.
    pub merchant_id: i64,
    /// Currency to settle in.
    pub currency: String,
}

impl SettlementTrigger {
    /// Validates `merchant_id` and applies the default currency.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] when `merchant_id <= 0`.
    pub fn new(merchant_id: i64, currency: Option<&str>) -> Result<Self, AdminError> {
        if merchant_id <= 0 {
            return Err(AdminError::Validation("merchant_id is required".to_string()));
        }
        Ok(Self {
            merchant_id,
            currency: normalize_currency(currency),
        })
    }
}

/// Upper-cases `currency`, falling back to [`DEFAULT_CURRENCY`] when blank.
#[must_use]
pub fn normalize_currency(currency: Option<&str>) -> String {
    match currency.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_ascii_uppercase(),
        _ => DEFAULT_CURRENCY.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn missing_currency_defaults_to_ngn() {
        let Ok(trigger) = SettlementTrigger::new(5, None) else {
            panic!("valid trigger");
        };
        assert_eq!(trigger.currency, "NGN");

        let Ok(trigger) = SettlementTrigger::new(5, Some("  ")) else {
            panic!("valid trigger");
        };
        assert_eq!(trigger.currency, "NGN");
    }

    #[test]
    fn explicit_currency_is_kept() {
        let Ok(trigger) = SettlementTrigger::new(5, Some("usd")) else {
            panic!("valid trigger");
        };
        assert_eq!(trigger.currency, "USD");
    }

    #[test]
    fn non_positive_merchant_is_rejected() {
        assert!(matches!(
            SettlementTrigger::new(0, None),
            Err(AdminError::Validation(_))
        ));
        assert!(matches!(
            SettlementTrigger::new(-3, Some("NGN")),
            Err(AdminError::Validation(_))
        ));
    }
}
