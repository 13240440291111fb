//! Client-built relay URLs must decode back to the intended sub-path.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cinerelay_core::request::sub_path_from_query;
use cinerelay_core::{RelayError, SubPath};

const RELAY: &str = "https://relay.example.workers.dev";

fn roundtrip(sp: &SubPath) -> String {
    let url = sp.relay_url(RELAY).unwrap();
    let (_, query) = url.split_once('?').expect("relay url has a query");
    sub_path_from_query(Some(query)).unwrap()
}

#[test]
fn ui_requests_survive_the_relay_query() {
    let cases = [
        SubPath::discover_popular_movies(),
        SubPath::search_movie("the matrix").unwrap(),
        SubPath::search_movie("100% wolf?").unwrap(),
        SubPath::movie_details(603),
        SubPath::tv_details(1399),
        SubPath::new("/trending/all/day?language=en-US").unwrap(),
    ];
    for sp in &cases {
        assert_eq!(roundtrip(sp), sp.as_str());
    }
}

#[test]
fn search_query_is_a_single_upstream_param() {
    let sp = SubPath::search_movie("tom & jerry").unwrap();
    let (_, qs) = sp.as_str().split_once('?').unwrap();
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(qs).unwrap();
    assert_eq!(pairs, vec![("query".to_string(), "tom & jerry".to_string())]);
}

#[test]
fn other_params_are_ignored() {
    let got = sub_path_from_query(Some("lang=en&path=%2Fmovie%2F550&cb=123")).unwrap();
    assert_eq!(got, "/movie/550");

    let err = sub_path_from_query(Some("lang=en&cb=123")).unwrap_err();
    assert!(matches!(err, RelayError::MissingPath));
}
