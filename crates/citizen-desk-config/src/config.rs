// crates/citizen-desk-config/src/config.rs
// ============================================================================
// Module: Citizen Desk Configuration
// Description: Configuration loading and validation for Citizen Desk.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: citizen-desk-core, citizen-desk-i18n, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional and defaults to a loopback server, the built-in
//! attachment limits, no object storage, and Kurdish Sorani as the locale.
//!
//! ## Invariants
//! - Upload limits may only tighten the built-in attachment limits.
//! - Plain-HTTP object-store endpoints require an explicit opt-in.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use citizen_desk_core::MAX_ATTACHMENT_BYTES;
use citizen_desk_core::MAX_ATTACHMENTS;
use citizen_desk_i18n::DEFAULT_LOCALE;
use citizen_desk_i18n::Locale;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "citizen-desk.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "CITIZEN_DESK_CONFIG";
/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
/// Default preference file used by the CLI.
pub const DEFAULT_PREFERENCES_PATH: &str = "citizen-desk-preferences.json";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Multipart framing allowance added on top of the attachment payload.
const MULTIPART_OVERHEAD_BYTES: usize = 2 * 1024 * 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Citizen Desk configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitizenDeskConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Attachment upload configuration.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Localization configuration.
    #[serde(default)]
    pub i18n: I18nConfig,
}

impl CitizenDeskConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Loads configuration like [`CitizenDeskConfig::load`], but falls back to
    /// defaults when no path was given and the resolved file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an existing or explicit file fails to load.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        match fs::read(&resolved) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(err) if path.is_none() && err.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
            Err(err) => Err(ConfigError::Io(err.to_string())),
        }
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies size and encoding limits to raw file contents.
    fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.upload.validate()?;
        self.i18n.validate()?;
        Ok(())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (defaults to [`DEFAULT_BIND`]).
    #[serde(default)]
    pub bind: Option<String>,
    /// Maximum request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Audit logging configuration.
    #[serde(default)]
    pub audit: ServerAuditConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: None,
            max_body_bytes: default_max_body_bytes(),
            audit: ServerAuditConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Returns the parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bind address is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let bind = self.bind.as_deref().unwrap_or(DEFAULT_BIND).trim();
        if bind.is_empty() {
            return Err(ConfigError::Invalid("server.bind must be non-empty".to_string()));
        }
        bind.parse().map_err(|_| ConfigError::Invalid("invalid bind address".to_string()))
    }

    /// Validates server configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }
        self.bind_addr()?;
        self.audit.validate()
    }
}

/// Audit logging configuration for server events.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerAuditConfig {
    /// Enable structured audit logging.
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
    /// Optional audit log path (JSON lines); stderr when unset.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for ServerAuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            path: None,
        }
    }
}

impl ServerAuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        Ok(())
    }
}

/// Attachment upload configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Maximum number of files per upload.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    /// Maximum size of a single file in bytes.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    /// Durable object storage; uploads are rejected when unset.
    #[serde(default)]
    pub storage: Option<ObjectStoreConfig>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            max_file_bytes: default_max_file_bytes(),
            storage: None,
        }
    }
}

impl UploadConfig {
    /// Validates upload limits and storage.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_files == 0 || self.max_files > MAX_ATTACHMENTS {
            return Err(ConfigError::Invalid(format!(
                "upload.max_files must be between 1 and {MAX_ATTACHMENTS}"
            )));
        }
        if self.max_file_bytes == 0 || self.max_file_bytes > MAX_ATTACHMENT_BYTES {
            return Err(ConfigError::Invalid(format!(
                "upload.max_file_bytes must be between 1 and {MAX_ATTACHMENT_BYTES}"
            )));
        }
        if let Some(storage) = &self.storage {
            storage.validate()?;
        }
        Ok(())
    }
}

/// Supported object-store providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectStoreProvider {
    /// Amazon S3 compatible object storage.
    S3,
}

/// Object-store configuration for attachment storage.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectStoreConfig {
    /// Provider selection for the object store.
    pub provider: ObjectStoreProvider,
    /// Bucket name for attachments.
    pub bucket: String,
    /// Optional region (S3-only, defaults to environment).
    #[serde(default)]
    pub region: Option<String>,
    /// Optional object-store endpoint (S3-compatible).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Optional key prefix inside the bucket.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Force path-style addressing (S3-compatible).
    #[serde(default)]
    pub force_path_style: bool,
    /// Allow non-TLS endpoints (explicit opt-in).
    #[serde(default)]
    pub allow_http: bool,
    /// Optional public base URL used to build attachment links.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

impl ObjectStoreConfig {
    /// Validates object-store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when object-store settings are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket.trim().is_empty() {
            return Err(ConfigError::Invalid("upload.storage.bucket must be set".to_string()));
        }
        if let Some(endpoint) = &self.endpoint {
            validate_http_url("upload.storage.endpoint", endpoint, self.allow_http)?;
        }
        if let Some(base) = &self.public_base_url {
            validate_http_url("upload.storage.public_base_url", base, self.allow_http)?;
        }
        if let Some(prefix) = &self.prefix {
            validate_object_store_prefix(prefix)?;
        }
        Ok(())
    }
}

/// Localization configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct I18nConfig {
    /// Locale used when no preference is stored.
    #[serde(default = "default_locale")]
    pub default_locale: Locale,
    /// Optional preference file path for the CLI.
    #[serde(default)]
    pub preferences_path: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            preferences_path: None,
        }
    }
}

impl I18nConfig {
    /// Returns the preference file path, falling back to the default name.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        PathBuf::from(
            self.preferences_path.as_deref().map_or(DEFAULT_PREFERENCES_PATH, str::trim),
        )
    }

    /// Validates localization configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.preferences_path {
            validate_path_string("i18n.preferences_path", path)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates that a URL uses http or https, with http gated by `allow_http`.
fn validate_http_url(field: &str, value: &str, allow_http: bool) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ConfigError::Invalid(format!("{field} must include http:// or https://")));
    }
    if trimmed.starts_with("http://") && !allow_http {
        return Err(ConfigError::Invalid(format!("{field} uses http:// without allow_http")));
    }
    Ok(())
}

/// Validates the object-store prefix string.
fn validate_object_store_prefix(value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("upload.storage.prefix must be non-empty".to_string()));
    }
    if trimmed.contains('\\') {
        return Err(ConfigError::Invalid(
            "upload.storage.prefix must not contain backslashes".to_string(),
        ));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("upload.storage.prefix exceeds max length".to_string()));
    }
    if trimmed.starts_with('/') {
        return Err(ConfigError::Invalid("upload.storage.prefix must be relative".to_string()));
    }
    let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
    for component in Path::new(normalized).components() {
        match component {
            Component::Normal(value) => {
                if value.to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
                    return Err(ConfigError::Invalid(
                        "upload.storage.prefix segment too long".to_string(),
                    ));
                }
            }
            _ => {
                return Err(ConfigError::Invalid(
                    "upload.storage.prefix must be relative without traversal".to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// Default maximum request body size in bytes: a full attachment set plus framing.
pub(crate) const fn default_max_body_bytes() -> usize {
    MAX_ATTACHMENTS * 10 * 1024 * 1024 + MULTIPART_OVERHEAD_BYTES
}

/// Audit logging is enabled unless explicitly disabled.
pub(crate) const fn default_audit_enabled() -> bool {
    true
}

/// Default per-upload file count.
pub(crate) const fn default_max_files() -> usize {
    MAX_ATTACHMENTS
}

/// Default per-file size limit.
pub(crate) const fn default_max_file_bytes() -> u64 {
    MAX_ATTACHMENT_BYTES
}

/// Default interface locale.
pub(crate) const fn default_locale() -> Locale {
    DEFAULT_LOCALE
}

// ============================================================================
// SECTION: Tests
// ============================================================================
