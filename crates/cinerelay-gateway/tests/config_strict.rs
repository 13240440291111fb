#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Write;

use cinerelay_core::RelayError;
use cinerelay_gateway::config::{self, UpstreamSection};
use secrecy::ExposeSecret;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
upstream:
  base_url: "https://api.themoviedb.org/3"
  tokn_env: "TMDB_ACCESS_TOKEN" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8787");
    assert_eq!(cfg.upstream.base_url, "https://api.themoviedb.org/3");
    assert_eq!(cfg.upstream.token_env, "TMDB_ACCESS_TOKEN");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
upstream:
  base_url: "http://127.0.0.1:4010/3"
  token_env: "RELAY_TOKEN"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.upstream.base_url, "http://127.0.0.1:4010/3");
    assert_eq!(cfg.upstream.token_env, "RELAY_TOKEN");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, RelayError::UnsupportedVersion));
}

#[test]
fn rejects_bad_listen() {
    let bad = r#"
version: 1
gateway:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_bad_base_urls() {
    for base in [
        "https://api.themoviedb.org/3/",
        "ftp://api.themoviedb.org/3",
        "api.themoviedb.org/3",
        "https://api.themoviedb.org/3?api_key=x",
        "https://api.themoviedb.org",
        "https://api.themoviedb.org/",
    ] {
        let yaml = format!("version: 1\nupstream:\n  base_url: \"{base}\"\n");
        let err = config::load_from_str(&yaml).expect_err(base);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "{base}");
    }
}

#[test]
fn rejects_empty_token_env() {
    let bad = "version: 1\nupstream:\n  token_env: \"  \"\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

// Each env test owns its variable names; tests in this file run in parallel.

fn upstream_reading(token_env: &str) -> UpstreamSection {
    UpstreamSection {
        token_env: token_env.to_string(),
        ..UpstreamSection::default()
    }
}

#[test]
fn empty_credential_is_absent() {
    std::env::set_var("CINERELAY_TEST_TOKEN_EMPTY", "");
    let cred = config::credential_from_env(&upstream_reading("CINERELAY_TEST_TOKEN_EMPTY"));
    assert!(cred.is_none());
}

#[test]
fn unset_credential_is_absent() {
    std::env::remove_var("CINERELAY_TEST_TOKEN_UNSET");
    let cred = config::credential_from_env(&upstream_reading("CINERELAY_TEST_TOKEN_UNSET"));
    assert!(cred.is_none());
}

#[test]
fn credential_is_read_from_named_var() {
    std::env::set_var("CINERELAY_TEST_TOKEN_SET", "abc");
    let cred = config::credential_from_env(&upstream_reading("CINERELAY_TEST_TOKEN_SET"))
        .expect("credential present");
    assert_eq!(cred.expose_secret(), "abc");
}

#[test]
fn config_env_pointing_at_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");
    std::env::set_var("CINERELAY_TEST_CONFIG_MISSING", &missing);
    let err = config::load_from_env("CINERELAY_TEST_CONFIG_MISSING").expect_err("must fail");
    assert!(matches!(err, RelayError::Internal(_)), "{err:?}");
}

#[test]
fn config_env_loads_named_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let yaml = r#"
version: 1
gateway:
  listen: "127.0.0.1:9100"
upstream:
  token_env: "RELAY_TOKEN"
"#;
    file.write_all(yaml.as_bytes()).unwrap();
    std::env::set_var("CINERELAY_TEST_CONFIG_FILE", file.path());

    let cfg = config::load_from_env("CINERELAY_TEST_CONFIG_FILE").expect("must load");
    assert_eq!(cfg.gateway.listen, "127.0.0.1:9100");
    assert_eq!(cfg.upstream.token_env, "RELAY_TOKEN");
}
