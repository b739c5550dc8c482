//! Service layer: admin workflow orchestration.
//!
//! [`AdminService`] sequences calls to the [`crate::persistence::AdminStore`]
//! and the sibling-service clients. Multi-step workflows run through a
//! [`Saga`] so that partial failures name the steps already committed.

pub mod admin_service;
pub mod saga;

pub use admin_service::{AdminService, ReviewSettings};
pub use saga::Saga;
