//! Data Transfer Objects for REST request parsing.
//!
//! Response bodies reuse the domain types directly; only inputs that need
//! defaults or validation live here.

pub mod common_dto;
pub mod settlement_dto;

pub use common_dto::*;
pub use settlement_dto::*;
