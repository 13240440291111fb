//! Shared application state for the relay.
//!
//! Everything here is fixed at construction: config, the upstream credential,
//! and the upstream client. Handlers never read the process environment.

use std::sync::Arc;

use cinerelay_core::error::Result;
use secrecy::SecretString;

use crate::config::GatewayConfig;
use crate::obs::metrics::RelayMetrics;
use crate::relay::upstream::{HttpUpstream, Upstream};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    credential: Option<SecretString>,
    upstream: Arc<dyn Upstream>,
    metrics: RelayMetrics,
}

impl AppState {
    /// Build state with the HTTP upstream at `cfg.upstream.base_url`.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig, credential: Option<SecretString>) -> Result<Self> {
        let upstream = HttpUpstream::new(cfg.upstream.base_url.clone())?;
        if credential.is_none() {
            tracing::warn!(
                env = %cfg.upstream.token_env,
                "upstream credential missing; relayed requests will fail with 500"
            );
        }
        Ok(Self::with_upstream(cfg, credential, Arc::new(upstream)))
    }

    pub fn with_upstream(
        cfg: GatewayConfig,
        credential: Option<SecretString>,
        upstream: Arc<dyn Upstream>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                credential,
                upstream,
                metrics: RelayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn credential(&self) -> Option<&SecretString> {
        self.inner.credential.as_ref()
    }

    pub fn upstream(&self) -> &dyn Upstream {
        self.inner.upstream.as_ref()
    }

    pub fn metrics(&self) -> &RelayMetrics {
        &self.inner.metrics
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
