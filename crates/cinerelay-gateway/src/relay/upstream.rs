//! Outbound call to the metadata API.
//!
//! One GET per relayed request, bearer credential attached, body validated as
//! JSON and handed back untouched. No retries.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde_json::value::RawValue;

use cinerelay_core::error::{RelayError, Result};

/// Anything that can resolve a sub-path to a JSON document.
///
/// The handler only sees this trait, so it can be driven without a network.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn fetch_json(&self, sub_path: &str, credential: &SecretString) -> Result<Box<RawValue>>;
}

/// Production upstream backed by a shared `reqwest::Client`.
pub struct HttpUpstream {
    http: reqwest::Client,
    base_url: String,
}

impl HttpUpstream {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cinerelay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::Internal(format!("http client init failed: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Base and sub-path are concatenated as-is; the sub-path brings its own
    /// query string.
    pub fn upstream_url(&self, sub_path: &str) -> String {
        format!("{}{}", self.base_url, sub_path)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch_json(&self, sub_path: &str, credential: &SecretString) -> Result<Box<RawValue>> {
        let url = self.upstream_url(sub_path);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(credential.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        // Upstream status is not propagated; the body is relayed with 200.
        if !status.is_success() {
            tracing::debug!(%status, sub_path, "upstream returned non-success status");
        }

        parse_body(&body)
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Validate an upstream body as a single JSON value without building a tree.
///
/// A leading UTF-8 byte order mark is dropped before parsing.
pub fn parse_body(body: &Bytes) -> Result<Box<RawValue>> {
    let json = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    serde_json::from_slice(json).map_err(|e| RelayError::Upstream(e.to_string()))
}
