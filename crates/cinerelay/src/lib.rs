//! Top-level facade crate for cinerelay.
//!
//! Re-exports the core types (errors, sub-path builders) and the gateway
//! library so users can depend on a single crate.

pub mod core {
    pub use cinerelay_core::*;
}

pub mod gateway {
    pub use cinerelay_gateway::*;
}

pub use cinerelay_core::{RelayError, Result, SubPath};
