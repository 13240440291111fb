//! Inbound query parsing.
//!
//! The relay takes its whole upstream target from one query parameter. The raw
//! query string is decoded here rather than through an extractor so that a
//! malformed query still ends in the regular JSON 400 (with CORS headers).

use crate::error::{RelayError, Result};

/// Name of the query parameter carrying the upstream sub-path.
pub const PATH_PARAM: &str = "path";

/// Extract the upstream sub-path from a raw (still encoded) query string.
///
/// The first `path` pair wins. An empty value counts as missing. The value is
/// returned decoded, so `path=/search/movie%3Fquery%3Dalien` yields
/// `/search/movie?query=alien`.
pub fn sub_path_from_query(raw: Option<&str>) -> Result<String> {
    let Some(raw) = raw else {
        return Err(RelayError::MissingPath);
    };

    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(raw) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(error = %e, "query string not decodable");
            return Err(RelayError::MissingPath);
        }
    };

    pairs
        .into_iter()
        .find(|(k, _)| k == PATH_PARAM)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
        .ok_or(RelayError::MissingPath)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(r: Result<String>) -> bool {
        matches!(r, Err(RelayError::MissingPath))
    }

    #[test]
    fn no_query() {
        assert!(missing(sub_path_from_query(None)));
        assert!(missing(sub_path_from_query(Some(""))));
    }

    #[test]
    fn empty_value_is_missing() {
        assert!(missing(sub_path_from_query(Some("path="))));
        assert!(missing(sub_path_from_query(Some("other=/movie/1"))));
    }

    #[test]
    fn decodes_encoded_sub_path() {
        let p = sub_path_from_query(Some("path=%2Fsearch%2Fmovie%3Fquery%3Dfight%2520club")).ok();
        assert_eq!(p.as_deref(), Some("/search/movie?query=fight%20club"));
    }

    #[test]
    fn unencoded_inner_query_is_kept() {
        // The details page sends the sub-path without encoding its own `?`.
        let p = sub_path_from_query(Some("path=/tv/1399?append_to_response=credits,videos")).ok();
        assert_eq!(p.as_deref(), Some("/tv/1399?append_to_response=credits,videos"));
    }

    #[test]
    fn first_occurrence_wins() {
        let p = sub_path_from_query(Some("path=/movie/550&path=/movie/551")).ok();
        assert_eq!(p.as_deref(), Some("/movie/550"));
    }
}
