use std::net::SocketAddr;

use cinerelay_core::error::{RelayError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub upstream: UpstreamSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            upstream: UpstreamSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RelayError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.upstream.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            RelayError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8787".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// Fixed upstream base; the client sub-path is appended verbatim.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the bearer token.
    /// The token itself never appears in the config file.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_env: default_token_env(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| RelayError::BadRequest(format!("upstream.base_url is not a URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RelayError::BadRequest(
                "upstream.base_url must use http or https".into(),
            ));
        }
        // a bare host would let the sub-path extend the hostname
        if matches!(url.path(), "" | "/") {
            return Err(RelayError::BadRequest(
                "upstream.base_url must include a path segment (e.g. /3)".into(),
            ));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(RelayError::BadRequest(
                "upstream.base_url must not carry a query or fragment".into(),
            ));
        }
        // sub-paths start with '/', so a trailing slash would double it
        if self.base_url.ends_with('/') {
            return Err(RelayError::BadRequest(
                "upstream.base_url must not end with '/'".into(),
            ));
        }
        if self.token_env.trim().is_empty() {
            return Err(RelayError::BadRequest("upstream.token_env must not be empty".into()));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".into()
}
fn default_token_env() -> String {
    "TMDB_ACCESS_TOKEN".into()
}
