//! Shared fixtures for citizen-desk-config integration tests.
// crates/citizen-desk-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Temp-file and assertion helpers for config suites.
// Purpose: Reduce duplication across load and section validation tests.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::io::Write;

use citizen_desk_config::CitizenDeskConfig;
use citizen_desk_config::ConfigError;
use tempfile::NamedTempFile;

/// Result type used by fallible tests.
pub type TestResult = Result<(), String>;

/// Writes `content` to a fresh temp file.
pub fn write_config(content: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content).map_err(|err| err.to_string())?;
    Ok(file)
}

/// Assert that a config result is an error containing a specific substring.
pub fn assert_invalid(result: Result<CitizenDeskConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
