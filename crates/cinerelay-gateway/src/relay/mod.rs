//! Metadata relay: browser request in, upstream JSON out.

pub mod cors;
pub mod handler;
pub mod upstream;

pub use handler::relay;
pub use upstream::{HttpUpstream, Upstream};
