//! Integration tests for credential resolution against a localconfig fixture.
//!
//! These tests validate the full resolution chain: a readable localconfig is
//! authoritative, an absent one selects the command-line fallback values.

use std::path::PathBuf;
use zexport_core::credentials::{self, CredentialOverrides};
use zexport_core::Error;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn cli_fallback() -> CredentialOverrides {
    CredentialOverrides {
        host: "cli.example.com".to_string(),
        port: "389".to_string(),
        bind_dn: "uid=cli,cn=admins,cn=zimbra".to_string(),
        password: "cli-secret".to_string(),
    }
}

#[test]
fn localconfig_is_authoritative_over_cli_values() {
    let path = fixtures_dir().join("localconfig.xml");
    let creds = credentials::resolve(&path, &cli_fallback()).unwrap();

    assert_eq!(creds.host(), "ldap.fixture.example.com");
    assert_eq!(creds.port(), "1389");
    assert_eq!(creds.bind_dn(), "uid=zimbra,cn=admins,cn=zimbra");
    assert_eq!(creds.bind_password(), "fixture-secret");
}

#[test]
fn absent_localconfig_selects_cli_fallback() {
    let path = fixtures_dir().join("no-such-localconfig.xml");
    let creds = credentials::resolve(&path, &cli_fallback()).unwrap();

    assert_eq!(creds.host(), "cli.example.com");
    assert_eq!(creds.port(), "389");
    assert_eq!(creds.bind_dn(), "uid=cli,cn=admins,cn=zimbra");
    assert_eq!(creds.bind_password(), "cli-secret");
}

#[test]
fn absent_localconfig_and_empty_cli_host_fails() {
    let path = fixtures_dir().join("no-such-localconfig.xml");
    let mut fallback = cli_fallback();
    fallback.host = String::new();

    let err = credentials::resolve(&path, &fallback).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
