//! Shared fixtures: an in-memory store and an app wired to mock services.

#![allow(dead_code, clippy::panic)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use tower::ServiceExt;

use kodra_admin::api::build_app;
use kodra_admin::app_state::AppState;
use kodra_admin::clients::Clients;
use kodra_admin::config::ServiceUrls;
use kodra_admin::domain::{
    Merchant, MerchantStatus, PendingKycRule, StatsAggregate, TransactionKind, TransactionRecord,
};
use kodra_admin::error::AdminError;
use kodra_admin::persistence::AdminStore;
use kodra_admin::service::{AdminService, ReviewSettings};

/// In-memory stand-in for the merchant/transaction schema.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub merchants: Mutex<Vec<Merchant>>,
    pub payments: Vec<TransactionRecord>,
    pub payouts: Vec<TransactionRecord>,
    pub stats: StatsAggregate,
    pub pending_balance: i64,
}

impl MemoryStore {
    pub fn merchant_status(&self, id: i64) -> Option<String> {
        let Ok(merchants) = self.merchants.lock() else {
            panic!("poisoned");
        };
        merchants.iter().find(|m| m.id == id).map(|m| m.status.clone())
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn list_merchants(&self, limit: i64) -> Result<Vec<Merchant>, AdminError> {
        let Ok(merchants) = self.merchants.lock() else {
            panic!("poisoned");
        };
        let mut list = merchants.clone();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(list)
    }

    async fn update_merchant_status(
        &self,
        id: i64,
        status: MerchantStatus,
    ) -> Result<(), AdminError> {
        let Ok(mut merchants) = self.merchants.lock() else {
            panic!("poisoned");
        };
        let Some(merchant) = merchants.iter_mut().find(|m| m.id == id) else {
            return Err(AdminError::NotFound(format!("merchant {id}")));
        };
        merchant.status = status.as_str().to_string();
        Ok(())
    }

    async fn list_payments(&self, limit: i64) -> Result<Vec<TransactionRecord>, AdminError> {
        Ok(newest_first(&self.payments, limit))
    }

    async fn list_payouts(&self, limit: i64) -> Result<Vec<TransactionRecord>, AdminError> {
        Ok(newest_first(&self.payouts, limit))
    }

    async fn stats(&self, _rule: PendingKycRule) -> Result<StatsAggregate, AdminError> {
        Ok(self.stats.clone())
    }

    async fn pending_settlement_total(&self, _currency: &str) -> Result<i64, AdminError> {
        Ok(self.pending_balance)
    }
}

fn newest_first(records: &[TransactionRecord], limit: i64) -> Vec<TransactionRecord> {
    let mut list = records.to_vec();
    list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    list.truncate(usize::try_from(limit).unwrap_or(0));
    list
}

pub fn at(minute: u32) -> DateTime<Utc> {
    let Some(ts) = Utc.with_ymd_and_hms(2025, 6, 1, 9, minute, 0).single() else {
        panic!("valid timestamp");
    };
    ts
}

pub fn merchant(id: i64, status: &str, kyc_status: &str) -> Merchant {
    Merchant {
        id,
        name: format!("Owner {id}"),
        email: format!("owner{id}@example.com"),
        business_name: Some(format!("Business {id}")),
        country: Some("NG".to_string()),
        status: status.to_string(),
        kyc_status: kyc_status.to_string(),
        total_volume: 0,
        currency: "NGN".to_string(),
        created_at: at(u32::try_from(id).unwrap_or(0) % 60),
        updated_at: at(0),
    }
}

pub fn record(id: i64, kind: TransactionKind, minute: u32) -> TransactionRecord {
    TransactionRecord {
        id,
        reference: format!("{kind:?}-{id}").to_uppercase(),
        merchant_id: 1,
        merchant_name: Some("Business 1".to_string()),
        customer_email: None,
        customer_name: None,
        amount: 250_000,
        currency: "NGN".to_string(),
        status: "successful".to_string(),
        payment_method: Some("card".to_string()),
        created_at: at(minute),
        kind,
    }
}

/// Builds the full router against `store`, with every sibling service at
/// `base_url`.
pub fn app(store: Arc<MemoryStore>, base_url: &str) -> Router {
    let urls = ServiceUrls {
        merchant: base_url.to_string(),
        compliance: base_url.to_string(),
        transaction: base_url.to_string(),
        settlement: base_url.to_string(),
    };
    let clients = Clients::new(&reqwest::Client::new(), &urls);
    let service = AdminService::new(store, clients, ReviewSettings::default());
    build_app(AppState {
        admin_service: Arc::new(service),
        service_name: Arc::from("admin-service"),
    })
}

/// Sends one request and returns status plus parsed JSON body (`Null` when empty).
pub async fn send(app: Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    };
    let Ok(request) = request else {
        panic!("valid request");
    };

    let Ok(response) = app.oneshot(request).await else {
        panic!("router is infallible");
    };
    let status = response.status();
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("readable body");
    };
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
