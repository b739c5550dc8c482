//! # kodra-admin
//!
//! Internal admin backend for the Kodra payments platform.
//!
//! Operators use it to list merchants and transactions, approve or suspend
//! merchants, review KYC, release or decline transactions held for fraud
//! review, trigger settlements, and read aggregate statistics. The service
//! owns no data: it reads the merchant/transaction schema directly and
//! issues narrow status changes to the sibling services.
//!
//! ## Architecture
//!
//! ```text
//! Operators (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── AdminService (service/)  ── Saga for multi-step workflows
//!     │
//!     ├── AdminStore (persistence/) ── PostgreSQL
//!     └── Clients (clients/)        ── merchant, compliance,
//!                                      transaction, settlement services
//! ```

pub mod api;
pub mod app_state;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
