//! End-to-end tests for the `citizen-desk` binary.
// crates/citizen-desk-cli/tests/locale_command.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Runs the binary for locale, translate, and config commands.
// Purpose: Ensure locale switches persist across invocations.
// Dependencies: citizen-desk-cli binary, tempfile
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::path::Path;
use std::process::Command;
use std::process::Output;

/// Writes a config whose preference file lives in `dir`.
fn write_config(dir: &Path, extra: &str) -> std::path::PathBuf {
    let prefs = dir.join("prefs.json");
    let config = dir.join("citizen-desk.toml");
    let body = format!("[i18n]\ndefault_locale = \"en\"\npreferences_path = '{}'\n{extra}", prefs.display());
    std::fs::write(&config, body).unwrap();
    config
}

/// Runs the binary with `args` and a clean locale environment.
fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_citizen-desk"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("CITIZEN_DESK_LANG")
        .env_remove("CITIZEN_DESK_CONFIG")
        .output()
        .unwrap()
}

/// Returns trimmed stdout.
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn locale_set_persists_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let before = run(&config, &["locale", "show"]);
    assert!(before.status.success());
    assert!(stdout(&before).contains("(en)"));

    let set = run(&config, &["locale", "set", "ar"]);
    assert!(set.status.success());
    assert!(dir.path().join("prefs.json").exists());

    let after = run(&config, &["locale", "show"]);
    assert!(after.status.success());
    assert!(stdout(&after).contains("(ar)"));
    assert!(stdout(&after).contains("ar-IQ"));
}

#[test]
fn lang_flag_overrides_stored_locale_without_persisting() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");
    assert!(run(&config, &["locale", "set", "kmr"]).status.success());

    let shown = run(&config, &["--lang", "en", "locale", "show"]);
    assert!(stdout(&shown).contains("(en)"));

    let stored = run(&config, &["locale", "show"]);
    assert!(stdout(&stored).contains("(kmr)"));
}

#[test]
fn unsupported_locale_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");
    let output = run(&config, &["locale", "set", "fr"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fr"));
    assert!(stderr.contains("ckb, kmr, ar, en"));
    assert!(!dir.path().join("prefs.json").exists());
}

#[test]
fn translate_interpolates_params() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");
    let output = run(
        &config,
        &["--lang", "en", "translate", "list.showing", "--param", "count=1", "--param", "total=4"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Showing 1 of 4 submissions");

    let missing = run(&config, &["--lang", "en", "translate", "no.such.key"]);
    assert_eq!(stdout(&missing), "no.such.key");
}

#[test]
fn config_validate_reports_invalid_limits() {
    let dir = tempfile::tempdir().unwrap();
    let valid = write_config(dir.path(), "");
    let ok = run(&valid, &["config", "validate"]);
    assert!(ok.status.success());
    assert_eq!(stdout(&ok), "Configuration is valid");

    let invalid = write_config(dir.path(), "[upload]\nmax_files = 9\n");
    let failed = run(&invalid, &["--lang", "en", "config", "validate"]);
    assert!(!failed.status.success());
    assert!(String::from_utf8_lossy(&failed.stderr).contains("upload.max_files"));
}
