//! cinerelay core: transport-agnostic request parsing, sub-path builders, and
//! the error taxonomy.
//!
//! This crate defines the contracts shared by the gateway and by clients that
//! compose relay requests. It carries no HTTP server or client dependency so it
//! can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `RelayError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod request;
pub mod subpath;

/// Shared result type.
pub use error::{ClientCode, RelayError, Result};
pub use subpath::SubPath;
