//! HTTP rendering of [`RelayError`].
//!
//! The error type lives in `cinerelay-core`, which has no axum dependency, so
//! the gateway wraps it to implement `IntoResponse`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cinerelay_core::error::RelayError;

use crate::relay::cors;

#[derive(Debug)]
pub struct ApiError(pub RelayError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, cors::error_headers(), Json(self.0.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};

    #[test]
    fn missing_path_is_400_with_cors() {
        let resp = ApiError(RelayError::MissingPath).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn upstream_failure_is_500() {
        let resp = ApiError(RelayError::Upstream("connection refused".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
