//! Admin service: orchestrates the store and the sibling-service clients.

use std::sync::Arc;

use chrono::Utc;

use super::saga::Saga;
use crate::clients::{Clients, KycDecision, KycQueueEntry, TransactionListResponse};
use crate::config::AdminConfig;
use crate::domain::settlement::normalize_currency;
use crate::domain::{
    ActionResult, ActionStatus, KycStatus, Merchant, MerchantStatus, PendingKycRule,
    PendingSettlements, ReviewDecision, SettlementTrigger, StatsSnapshot, TransactionRecord,
    merge_transaction_feed, review_reference,
};
use crate::error::AdminError;
use crate::persistence::{
    AdminStore, DEFAULT_MERCHANT_LIMIT, DEFAULT_TRANSACTION_LIMIT, effective_limit,
};

/// Review settings that shape admin actions and stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSettings {
    /// Reviewer id recorded with KYC decisions.
    pub reviewer_id: i64,
    /// Pending-KYC definition used by [`AdminService::stats`].
    pub pending_kyc_rule: PendingKycRule,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            reviewer_id: 101,
            pending_kyc_rule: PendingKycRule::default(),
        }
    }
}

impl ReviewSettings {
    /// Extracts the review settings from the service configuration.
    #[must_use]
    pub const fn from_config(config: &AdminConfig) -> Self {
        Self {
            reviewer_id: config.kyc_reviewer_id,
            pending_kyc_rule: config.pending_kyc_rule,
        }
    }
}

/// Orchestration layer for all admin actions.
///
/// Every workflow is strictly sequential and stops at the first failing
/// step. Nothing is retried and nothing is rolled back; see [`Saga`].
#[derive(Debug, Clone)]
pub struct AdminService {
    store: Arc<dyn AdminStore>,
    clients: Clients,
    settings: ReviewSettings,
}

impl AdminService {
    /// Creates a new `AdminService`.
    #[must_use]
    pub fn new(store: Arc<dyn AdminStore>, clients: Clients, settings: ReviewSettings) -> Self {
        Self {
            store,
            clients,
            settings,
        }
    }

    /// Lists merchants, newest first. `limit <= 0` means the default (200).
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn list_merchants(&self, limit: i64) -> Result<Vec<Merchant>, AdminError> {
        let merchants = self
            .store
            .list_merchants(effective_limit(limit, DEFAULT_MERCHANT_LIMIT))
            .await?;
        tracing::debug!(count = merchants.len(), "merchants listed");
        Ok(merchants)
    }

    /// Proxies the merchant service's pending-KYC queue, projected onto
    /// [`KycQueueEntry`].
    ///
    /// # Errors
    ///
    /// Propagates merchant-service errors; there is no local fallback.
    pub async fn list_pending_merchants(&self) -> Result<Vec<KycQueueEntry>, AdminError> {
        let merchants = self
            .clients
            .merchant
            .list_by_kyc_status(KycStatus::Pending)
            .await?;
        tracing::info!(count = merchants.len(), "pending KYC merchants retrieved");
        Ok(merchants)
    }

    /// Marks KYC completed, then activates the merchant.
    ///
    /// # Errors
    ///
    /// Returns the first step's error unchanged, or
    /// [`AdminError::PartialFailure`] if activation fails after KYC was
    /// already marked completed.
    pub async fn approve_merchant(&self, id: i64) -> Result<ActionResult, AdminError> {
        let merchants = &self.clients.merchant;
        let mut saga = Saga::new("approve_merchant", id);
        saga.step(
            "kyc_completed",
            merchants.update_kyc_status(id, KycStatus::Completed),
        )
        .await?;
        saga.step(
            "activate_merchant",
            merchants.update_status(id, MerchantStatus::Active),
        )
        .await?;
        Ok(ActionResult::new(id, ActionStatus::Active))
    }

    /// Suspends a merchant with a local status update.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for unknown ids, or store errors.
    pub async fn suspend_merchant(&self, id: i64) -> Result<ActionResult, AdminError> {
        self.store
            .update_merchant_status(id, MerchantStatus::Suspended)
            .await?;
        tracing::info!(merchant_id = id, "merchant suspended");
        Ok(ActionResult::new(id, ActionStatus::Suspended))
    }

    /// Records KYC approval with compliance, then activates the merchant.
    ///
    /// # Errors
    ///
    /// Returns the compliance error unchanged, or
    /// [`AdminError::PartialFailure`] if activation fails after approval.
    pub async fn approve_merchant_kyc(&self, id: i64) -> Result<ActionResult, AdminError> {
        let decision = KycDecision::approve(id, self.settings.reviewer_id);
        let mut saga = Saga::new("approve_merchant_kyc", id);
        saga.step("kyc_approved", self.clients.compliance.update_kyc(&decision))
            .await?;
        saga.step(
            "activate_merchant",
            self.clients
                .merchant
                .update_status(id, MerchantStatus::Active),
        )
        .await?;
        Ok(ActionResult::new(id, ActionStatus::Approved))
    }

    /// Records KYC rejection with compliance.
    ///
    /// # Errors
    ///
    /// Propagates compliance-service errors.
    pub async fn reject_merchant_kyc(&self, id: i64) -> Result<ActionResult, AdminError> {
        let decision = KycDecision::reject(id, self.settings.reviewer_id);
        self.clients.compliance.update_kyc(&decision).await?;
        tracing::info!(merchant_id = id, "merchant KYC rejected");
        Ok(ActionResult::new(id, ActionStatus::Rejected))
    }

    /// Reopens the KYC flow: KYC status back to `pending`, then a
    /// best-effort reset of the account status to `pending`.
    ///
    /// A failure of the second call is logged and reported in the result
    /// message, never returned as an error.
    ///
    /// # Errors
    ///
    /// Propagates merchant-service errors from the KYC status update.
    pub async fn enable_merchant_kyc(&self, id: i64) -> Result<ActionResult, AdminError> {
        let merchants = &self.clients.merchant;
        merchants.update_kyc_status(id, KycStatus::Pending).await?;

        let result = ActionResult::new(id, ActionStatus::Enabled);
        match merchants.update_status(id, MerchantStatus::Pending).await {
            Ok(()) => Ok(result),
            Err(e) => {
                tracing::warn!(merchant_id = id, error = %e, "merchant status not reset to pending");
                Ok(result.with_message(format!("merchant status not reset to pending: {e}")))
            }
        }
    }

    /// Lists payments and payouts merged into one feed, newest first.
    /// `limit <= 0` means the default (100).
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn list_transactions(&self, limit: i64) -> Result<Vec<TransactionRecord>, AdminError> {
        let limit = effective_limit(limit, DEFAULT_TRANSACTION_LIMIT);
        let payments = self.store.list_payments(limit).await?;
        let payouts = self.store.list_payouts(limit).await?;
        Ok(merge_transaction_feed(
            payments,
            payouts,
            usize::try_from(limit).unwrap_or(usize::MAX),
        ))
    }

    /// Proxies the transaction service's review queue.
    ///
    /// # Errors
    ///
    /// Propagates transaction-service errors.
    pub async fn list_fraudulent_transactions(
        &self,
        limit: i64,
    ) -> Result<TransactionListResponse, AdminError> {
        self.clients.transaction.list_flagged(limit).await
    }

    /// Approves a transaction held for review.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank or dot-segment
    /// reference and [`AdminError::Rejected`] when the transaction service
    /// refuses.
    pub async fn approve_transaction(&self, reference: &str) -> Result<(), AdminError> {
        self.review_transaction(reference, ReviewDecision::Approve)
            .await
    }

    /// Declines a transaction held for review.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank or dot-segment
    /// reference and [`AdminError::Rejected`] when the transaction service
    /// refuses.
    pub async fn decline_transaction(&self, reference: &str) -> Result<(), AdminError> {
        self.review_transaction(reference, ReviewDecision::Decline)
            .await
    }

    async fn review_transaction(
        &self,
        reference: &str,
        decision: ReviewDecision,
    ) -> Result<(), AdminError> {
        let reference = review_reference(reference)?;

        self.clients
            .transaction
            .update_status(reference, decision.target_status())
            .await
            .map_err(AdminError::into_rejection)?;

        tracing::info!(reference, status = decision.target_status(), "transaction reviewed");
        Ok(())
    }

    /// Total balance awaiting settlement in `currency` (default NGN).
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn pending_settlements(
        &self,
        currency: Option<&str>,
    ) -> Result<PendingSettlements, AdminError> {
        let currency = normalize_currency(currency);
        let total_pending = self.store.pending_settlement_total(&currency).await?;
        Ok(PendingSettlements {
            total_pending,
            currency,
        })
    }

    /// Validates and forwards a settlement run to the settlement service.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for `merchant_id <= 0` without
    /// calling out, [`AdminError::Rejected`] when the settlement service
    /// refuses, or transport errors.
    pub async fn trigger_settlement(
        &self,
        merchant_id: i64,
        currency: Option<&str>,
    ) -> Result<SettlementTrigger, AdminError> {
        let trigger = SettlementTrigger::new(merchant_id, currency)?;
        self.clients
            .settlement
            .trigger(trigger.merchant_id, &trigger.currency)
            .await
            .map_err(AdminError::into_rejection)?;

        tracing::info!(
            merchant_id = trigger.merchant_id,
            currency = %trigger.currency,
            "settlement triggered"
        );
        Ok(trigger)
    }

    /// Computes the stats snapshot.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn stats(&self) -> Result<StatsSnapshot, AdminError> {
        let aggregate = self.store.stats(self.settings.pending_kyc_rule).await?;
        Ok(StatsSnapshot::from_aggregate(aggregate, Utc::now()))
    }
}
