// crates/citizen-desk-i18n/src/preferences.rs
// ============================================================================
// Module: Preference Stores
// Description: Durable key-value storage for user interface preferences.
// Purpose: Persist the chosen locale across sessions.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`PreferenceStore`] maps namespaced keys to string values. The file
//! store keeps a single JSON object on disk and replaces it atomically on
//! every write; the in-memory store backs tests and ephemeral hosts.
//!
//! ## Invariants
//! - A missing preference file reads as an empty store.
//! - Writes never leave a partially written preference file behind.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::PoisonError;

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Preference key under which the locale identifier is stored.
pub const LOCALE_PREFERENCE_KEY: &str = "citizen-desk:locale";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Preference storage errors.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// I/O failure while reading or writing preferences.
    #[error("preference io error: {0}")]
    Io(String),
    /// Stored preferences are not a JSON object of strings.
    #[error("preference parse error: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Store Trait
// ============================================================================

/// Durable string preferences keyed by namespace.
pub trait PreferenceStore: Send + Sync {
    /// Loads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the backing storage cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

// ============================================================================
// SECTION: File Store
// ============================================================================

/// Preference store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    /// Path to the JSON preference file.
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Creates a store reading and writing `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Returns the preference file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every stored preference.
    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(PreferenceError::Io(err.to_string())),
        };
        serde_json::from_str(&content).map_err(|err| PreferenceError::Parse(err.to_string()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(PreferenceError::Parse(_)) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        let payload = serde_json::to_vec_pretty(&entries)
            .map_err(|err| PreferenceError::Parse(err.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| PreferenceError::Io(err.to_string()))?;
        }
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|err| PreferenceError::Io(err.to_string()))?;
        file.write_all(&payload).map_err(|err| PreferenceError::Io(err.to_string()))?;
        file.sync_all().map_err(|err| PreferenceError::Io(err.to_string()))?;
        fs::rename(&temp_path, &self.path).map_err(|err| PreferenceError::Io(err.to_string()))
    }
}

// ============================================================================
// SECTION: Memory Store
// ============================================================================

/// Preference store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    /// Stored preferences.
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one preference.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
