//! Relay handler.
//!
//! Order of checks: preflight, then `path`, then credential. Only a request
//! that passes all three reaches the upstream.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::Method,
    response::{IntoResponse, Response},
};
use serde_json::value::RawValue;

use cinerelay_core::error::{RelayError, Result};
use cinerelay_core::request::sub_path_from_query;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::obs::metrics::RelayMetrics;
use crate::relay::cors;

pub async fn relay(
    State(app): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Response {
    if method == Method::OPTIONS {
        app.metrics().requests.inc(&[("outcome", "preflight")]);
        return cors::preflight();
    }

    match forward(&app, query.as_deref()).await {
        Ok(body) => {
            app.metrics().requests.inc(&[("outcome", "ok")]);
            cors::relayed_json(body.get().to_owned())
        }
        Err(e) => {
            app.metrics().requests.inc(&[("outcome", e.client_code().as_str())]);
            ApiError(e).into_response()
        }
    }
}

async fn forward(app: &AppState, query: Option<&str>) -> Result<Box<RawValue>> {
    let sub_path = sub_path_from_query(query)?;
    let Some(credential) = app.credential() else {
        tracing::error!("upstream credential not configured");
        return Err(RelayError::CredentialMissing);
    };

    let started = Instant::now();
    let res = {
        let _inflight = InflightGuard::enter(app.metrics());
        app.upstream().fetch_json(&sub_path, credential).await
    };

    let result = if res.is_ok() { "ok" } else { "error" };
    app.metrics()
        .upstream_duration
        .observe(&[("result", result)], started.elapsed());

    if let Err(RelayError::Upstream(details)) = &res {
        tracing::warn!(sub_path = %sub_path, error = %details, "upstream fetch failed");
    }
    res
}

/// Keeps the in-flight gauge balanced when the client disconnects mid-call.
struct InflightGuard<'a>(&'a RelayMetrics);

impl<'a> InflightGuard<'a> {
    fn enter(metrics: &'a RelayMetrics) -> Self {
        metrics.upstream_inflight.inc();
        Self(metrics)
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        self.0.upstream_inflight.dec();
    }
}
