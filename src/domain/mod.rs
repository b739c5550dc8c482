//! Domain layer: merchants, the unified transaction feed, the stats
//! snapshot, settlements and the result shape returned by admin actions.

pub mod action;
pub mod merchant;
pub mod settlement;
pub mod stats;
pub mod transaction;

pub use action::{ActionResult, ActionStatus};
pub use merchant::{KycStatus, Merchant, MerchantStatus};
pub use settlement::{DEFAULT_CURRENCY, PendingSettlements, SettlementTrigger};
pub use stats::{PendingKycRule, StatsAggregate, StatsSnapshot};
pub use transaction::{
    ReviewDecision, TransactionKind, TransactionRecord, merge_transaction_feed, review_reference,
};
