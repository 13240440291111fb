//! cinerelay gateway library entry.
//!
//! Wires config, the upstream client, the relay handler, and ops endpoints
//! into one axum service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod relay;
pub mod router;
