//! Axum router wiring.
//!
//! Ops endpoints are fixed routes; every other path is served by the relay,
//! so the service can sit behind any host or prefix.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, ops, relay};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .fallback(relay::relay)
        .with_state(state)
        .layer(relay::cors::origin_layer())
        .layer(TraceLayer::new_for_http())
}
