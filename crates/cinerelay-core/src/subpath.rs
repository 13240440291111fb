//! Sub-path builders for relay clients.
//!
//! The relay treats the sub-path as opaque. These helpers only exist so that
//! callers compose the same upstream requests the discovery UI issues (search,
//! popular listing, details pages) with correct encoding.

use std::fmt;

use crate::error::{RelayError, Result};
use crate::request::PATH_PARAM;

/// Extra objects embedded in details responses.
const DETAILS_APPEND: &str = "credits,videos";

/// An upstream sub-path including its own (already encoded) query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubPath(String);

impl SubPath {
    /// Wrap a caller-built sub-path. Must start with `/`.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !raw.starts_with('/') {
            return Err(RelayError::BadRequest(format!("sub-path must start with '/': {raw}")));
        }
        Ok(Self(raw))
    }

    /// Free-text movie search.
    pub fn search_movie(query: &str) -> Result<Self> {
        let qs = encode(&[("query", query)])?;
        Ok(Self(format!("/search/movie?{qs}")))
    }

    /// Movies ordered by popularity (landing page when the search box is empty).
    pub fn discover_popular_movies() -> Self {
        Self("/discover/movie?sort_by=popularity.desc".into())
    }

    pub fn movie_details(id: u64) -> Self {
        Self(format!("/movie/{id}?append_to_response={DETAILS_APPEND}"))
    }

    pub fn tv_details(id: u64) -> Self {
        Self(format!("/tv/{id}?append_to_response={DETAILS_APPEND}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full relay URL, with the sub-path encoded into the `path` parameter.
    pub fn relay_url(&self, relay_base: &str) -> Result<String> {
        let qs = encode(&[(PATH_PARAM, self.0.as_str())])?;
        Ok(format!("{relay_base}?{qs}"))
    }
}

impl fmt::Display for SubPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn encode(pairs: &[(&str, &str)]) -> Result<String> {
    serde_urlencoded::to_string(pairs)
        .map_err(|e| RelayError::Internal(format!("query encode failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::sub_path_from_query;

    #[test]
    fn search_encodes_query() {
        let p = SubPath::search_movie("fight club & more").ok();
        assert_eq!(
            p.as_ref().map(SubPath::as_str),
            Some("/search/movie?query=fight+club+%26+more")
        );
    }

    #[test]
    fn details_paths() {
        assert_eq!(
            SubPath::movie_details(550).as_str(),
            "/movie/550?append_to_response=credits,videos"
        );
        assert_eq!(
            SubPath::tv_details(1399).to_string(),
            "/tv/1399?append_to_response=credits,videos"
        );
    }

    #[test]
    fn rejects_relative_sub_path() {
        assert!(SubPath::new("movie/550").is_err());
        assert!(SubPath::new("/movie/550").is_ok());
    }

    #[test]
    fn relay_url_survives_query_parsing() {
        let sp = SubPath::search_movie("amélie").ok();
        let url = sp.as_ref().and_then(|s| s.relay_url("https://relay.example").ok());
        let url = url.unwrap_or_default();
        assert!(url.starts_with("https://relay.example?path=%2Fsearch%2Fmovie%3Fquery%3D"));

        let query = url.split_once('?').map(|(_, q)| q);
        let back = sub_path_from_query(query).ok();
        assert_eq!(back.as_deref(), sp.as_ref().map(SubPath::as_str));
    }
}
