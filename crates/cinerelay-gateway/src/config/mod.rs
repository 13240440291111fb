//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use cinerelay_core::error::{RelayError, Result};
use secrecy::SecretString;

pub use schema::{GatewayConfig, GatewaySection, UpstreamSection};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "CINERELAY_CONFIG";
/// Config file used when `CINERELAY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "cinerelay.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RelayError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| RelayError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config the binary runs with (`CINERELAY_CONFIG`, then
/// `cinerelay.yaml`, then defaults).
pub fn load_for_process() -> Result<GatewayConfig> {
    load_from_env(CONFIG_PATH_ENV)
}

/// Same resolution with the path variable named by `path_env`.
///
/// An explicitly named file must exist. The default file is optional; without
/// it the built-in defaults apply.
pub fn load_from_env(path_env: &str) -> Result<GatewayConfig> {
    if let Ok(path) = std::env::var(path_env) {
        return load_from_file(&path);
    }
    match fs::metadata(Path::new(DEFAULT_CONFIG_PATH)) {
        Ok(_) => load_from_file(DEFAULT_CONFIG_PATH),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
            let cfg = GatewayConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(RelayError::Internal(format!(
            "stat config failed ({DEFAULT_CONFIG_PATH}): {e}"
        ))),
    }
}

/// Read the upstream credential from the variable named by `upstream.token_env`.
///
/// Unset or empty means "not configured"; the relay still boots and answers
/// each proxied request with a 500.
pub fn credential_from_env(upstream: &UpstreamSection) -> Option<SecretString> {
    match std::env::var(&upstream.token_env) {
        Ok(v) if !v.is_empty() => Some(SecretString::from(v)),
        _ => None,
    }
}
