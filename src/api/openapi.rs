//! OpenAPI document for the admin API.

use utoipa::OpenApi;

use super::handlers::{merchant, settlement, stats, system, transaction};

/// OpenAPI 3 description of every admin endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Kodra Admin API",
        description = "Internal admin backend: merchants, KYC review, transactions, settlements and stats."
    ),
    paths(
        system::health_handler,
        merchant::list_merchants,
        merchant::list_pending_merchants,
        merchant::approve_merchant,
        merchant::suspend_merchant,
        merchant::approve_merchant_kyc,
        merchant::reject_merchant_kyc,
        merchant::enable_merchant_kyc,
        transaction::list_transactions,
        transaction::list_fraudulent_transactions,
        transaction::approve_transaction,
        transaction::decline_transaction,
        settlement::pending_settlements,
        settlement::trigger_settlement,
        stats::stats,
    ),
    tags(
        (name = "System", description = "Liveness"),
        (name = "Merchants", description = "Merchant listing and account status"),
        (name = "KYC", description = "KYC review decisions"),
        (name = "Transactions", description = "Transaction feed and manual review"),
        (name = "Settlements", description = "Pending balances and settlement runs"),
        (name = "Stats", description = "Aggregate statistics"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_admin_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/admin/merchants/{id}/approve"));
        assert!(doc.paths.paths.contains_key("/admin/transactions/fraud"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
