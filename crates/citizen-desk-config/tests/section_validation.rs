//! Section validation tests for citizen-desk-config.
// crates/citizen-desk-config/tests/section_validation.rs
// =============================================================================
// Module: Config Section Validation Tests
// Description: Server, upload, storage, and i18n constraints.
// Purpose: Ensure invalid sections are rejected with actionable messages.
// =============================================================================

use citizen_desk_config::CitizenDeskConfig;

mod common;

use common::TestResult;
use common::assert_invalid;

#[test]
fn bind_must_be_a_socket_address() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml("[server]\nbind = \"localhost\"\n"),
        "invalid bind address",
    )
}

#[test]
fn body_limit_must_be_positive() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml("[server]\nmax_body_bytes = 0\n"),
        "max_body_bytes must be greater than zero",
    )
}

#[test]
fn audit_path_must_be_non_empty() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml("[server.audit]\npath = \"  \"\n"),
        "audit.path must be non-empty",
    )
}

#[test]
fn upload_limits_may_only_tighten() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml("[upload]\nmax_files = 6\n"),
        "upload.max_files must be between 1 and 5",
    )?;
    assert_invalid(
        CitizenDeskConfig::from_toml("[upload]\nmax_files = 0\n"),
        "upload.max_files",
    )?;
    assert_invalid(
        CitizenDeskConfig::from_toml("[upload]\nmax_file_bytes = 10485761\n"),
        "upload.max_file_bytes must be between 1 and 10485760",
    )?;
    CitizenDeskConfig::from_toml("[upload]\nmax_files = 1\nmax_file_bytes = 10485760\n")
        .map(|_| ())
        .map_err(|err| err.to_string())
}

#[test]
fn storage_bucket_is_required() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml("[upload.storage]\nprovider = \"s3\"\nbucket = \" \"\n"),
        "upload.storage.bucket must be set",
    )
}

#[test]
fn storage_endpoint_requires_scheme_and_http_opt_in() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml(
            "[upload.storage]\nprovider = \"s3\"\nbucket = \"b\"\nendpoint = \"minio:9000\"\n",
        ),
        "upload.storage.endpoint must include http:// or https://",
    )?;
    assert_invalid(
        CitizenDeskConfig::from_toml(
            "[upload.storage]\nprovider = \"s3\"\nbucket = \"b\"\nendpoint = \"http://minio:9000\"\n",
        ),
        "upload.storage.endpoint uses http:// without allow_http",
    )
}

#[test]
fn storage_prefix_rejects_traversal() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml(
            "[upload.storage]\nprovider = \"s3\"\nbucket = \"b\"\nprefix = \"a/../b\"\n",
        ),
        "upload.storage.prefix must be relative without traversal",
    )
}

#[test]
fn storage_provider_must_be_known() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml("[upload.storage]\nprovider = \"gcs\"\nbucket = \"b\"\n"),
        "config parse error",
    )
}

#[test]
fn default_locale_must_be_supported() -> TestResult {
    assert_invalid(CitizenDeskConfig::from_toml("[i18n]\ndefault_locale = \"fr\"\n"), "parse error")
}

#[test]
fn preferences_path_must_be_non_empty() -> TestResult {
    assert_invalid(
        CitizenDeskConfig::from_toml("[i18n]\npreferences_path = \"\"\n"),
        "i18n.preferences_path must be non-empty",
    )
}
