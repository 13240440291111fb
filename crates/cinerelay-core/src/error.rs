//! Shared error type across cinerelay crates.

use serde_json::json;
use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Required `path` query parameter absent.
    MissingPath,
    /// Upstream credential not configured on the server.
    CredentialMissing,
    /// Upstream call or body parse failed.
    UpstreamFailed,
    /// Invalid input (config, startup).
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::MissingPath => "MISSING_PATH",
            ClientCode::CredentialMissing => "CREDENTIAL_MISSING",
            ClientCode::UpstreamFailed => "UPSTREAM_FAILED",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Unified error type used by core and gateway.
///
/// Every transport failure (DNS, connect, TLS, body read, JSON parse) collapses
/// into [`RelayError::Upstream`]; callers only ever see the message.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing path parameter")]
    MissingPath,
    #[error("TMDB access token not configured")]
    CredentialMissing,
    #[error("Failed to fetch from TMDB")]
    Upstream(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RelayError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RelayError::MissingPath => ClientCode::MissingPath,
            RelayError::CredentialMissing => ClientCode::CredentialMissing,
            RelayError::Upstream(_) => ClientCode::UpstreamFailed,
            RelayError::BadRequest(_) => ClientCode::BadRequest,
            RelayError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            RelayError::Internal(_) => ClientCode::Internal,
        }
    }

    /// HTTP status the gateway answers with.
    pub fn http_status(&self) -> u16 {
        match self {
            RelayError::MissingPath
            | RelayError::BadRequest(_)
            | RelayError::UnsupportedVersion => 400,
            RelayError::CredentialMissing
            | RelayError::Upstream(_)
            | RelayError::Internal(_) => 500,
        }
    }

    /// JSON body sent to the client.
    ///
    /// Only upstream failures carry `details`.
    pub fn body(&self) -> serde_json::Value {
        match self {
            RelayError::Upstream(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}
