//! Typed HTTP clients for the sibling services.
//!
//! All clients share one `reqwest::Client` built at startup. A request
//! either returns a decoded 2xx body or one of three errors:
//! [`AdminError::Transport`](crate::error::AdminError::Transport),
//! [`AdminError::UpstreamStatus`](crate::error::AdminError::UpstreamStatus) or
//! [`AdminError::Decode`](crate::error::AdminError::Decode). Nothing is retried.

pub mod compliance;
mod http;
pub mod merchant;
pub mod settlement;
pub mod transaction;

use std::fmt;

pub use compliance::{ComplianceClient, KycDecision};
pub use merchant::{KycQueueEntry, MerchantClient};
pub use settlement::SettlementClient;
pub use transaction::{FlaggedTransaction, TransactionClient, TransactionListResponse};

use crate::config::ServiceUrls;

/// Sibling service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Merchant service.
    Merchant,
    /// Compliance service.
    Compliance,
    /// Transaction service.
    Transaction,
    /// Settlement service.
    Settlement,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Merchant => "merchant service",
            Self::Compliance => "compliance service",
            Self::Transaction => "transaction service",
            Self::Settlement => "settlement service",
        };
        f.write_str(name)
    }
}

/// The full set of outbound clients, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct Clients {
    /// Merchant service client.
    pub merchant: MerchantClient,
    /// Compliance service client.
    pub compliance: ComplianceClient,
    /// Transaction service client.
    pub transaction: TransactionClient,
    /// Settlement service client.
    pub settlement: SettlementClient,
}

impl Clients {
    /// Builds every client on top of `http`.
    #[must_use]
    pub fn new(http: &reqwest::Client, urls: &ServiceUrls) -> Self {
        Self {
            merchant: MerchantClient::new(http.clone(), &urls.merchant),
            compliance: ComplianceClient::new(http.clone(), &urls.compliance),
            transaction: TransactionClient::new(http.clone(), &urls.transaction),
            settlement: SettlementClient::new(http.clone(), &urls.settlement),
        }
    }
}
