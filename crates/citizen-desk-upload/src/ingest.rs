// crates/citizen-desk-upload/src/ingest.rs
// ============================================================================
// Module: Upload Ingest
// Description: Limit checks and blob writes for a batch of uploaded files.
// Purpose: Turn received files into durable attachment descriptors.
// Dependencies: citizen-desk-config, citizen-desk-core, crate::blob
// ============================================================================

//! ## Overview
//! [`store_files`] is the server half of the upload collaborator: it checks a
//! batch against the configured limits, writes every file to a
//! [`BlobStore`], and reports the descriptors the client turns into
//! attachments.
//!
//! ## Invariants
//! - Limits are checked before any byte is written.
//! - Either every file is described in the result or an error is returned.
//! - Object names are unique within a batch, so repeated file names never
//!   overwrite each other.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use bytes::Bytes;
use citizen_desk_config::UploadConfig;
use citizen_desk_core::Attachment;
use citizen_desk_core::MAX_ATTACHMENT_BYTES;
use citizen_desk_core::MAX_ATTACHMENTS;
use citizen_desk_core::PendingFile;
use citizen_desk_core::Timestamp;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::blob::BlobStore;
use crate::blob::numbered_object_name;
use crate::blob::object_name;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Per-batch upload limits.
///
/// # Invariants
/// - Never looser than the built-in attachment limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    /// Maximum files per batch.
    pub max_files: usize,
    /// Maximum bytes per file.
    pub max_file_bytes: u64,
}

impl UploadLimits {
    /// Limits derived from validated upload configuration.
    #[must_use]
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            max_files: config.max_files.min(MAX_ATTACHMENTS),
            max_file_bytes: config.max_file_bytes.min(MAX_ATTACHMENT_BYTES),
        }
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_files: MAX_ATTACHMENTS,
            max_file_bytes: MAX_ATTACHMENT_BYTES,
        }
    }
}

/// Descriptor of one durably stored file, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Original file name.
    pub name: String,
    /// MIME type reported by the client.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Retrievable URL.
    pub url: String,
}

impl UploadedFile {
    /// Converts the descriptor into a durable attachment.
    #[must_use]
    pub fn into_attachment(self) -> Attachment {
        Attachment::durable(self.name, self.mime_type, self.size, self.url)
    }
}

/// Upload response body: `{"files": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Stored files, in request order.
    pub files: Vec<UploadedFile>,
}

/// Upload failures on either side of the wire.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No durable storage is configured.
    #[error("upload storage is not configured")]
    NotConfigured,
    /// The batch holds more files than allowed.
    #[error("too many files: {count} (limit {limit})")]
    TooManyFiles {
        /// Files in the batch.
        count: usize,
        /// Allowed files.
        limit: usize,
    },
    /// A file exceeds the per-file size limit.
    #[error("file {name} exceeds {limit} bytes")]
    FileTooLarge {
        /// Offending file name.
        name: String,
        /// Allowed bytes.
        limit: u64,
    },
    /// The request body could not be read.
    #[error("upload request malformed: {0}")]
    Malformed(String),
    /// The blob store rejected a write.
    #[error("upload storage error: {0}")]
    Storage(String),
    /// The upload endpoint could not be reached.
    #[error("upload transport error: {0}")]
    Transport(String),
    /// The upload endpoint answered with an error status.
    #[error("upload rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },
    /// The upload response could not be decoded.
    #[error("upload response invalid: {0}")]
    Decode(String),
}

// ============================================================================
// SECTION: Ingest
// ============================================================================

/// Checks `files` against `limits` and writes each one to `store`.
///
/// # Errors
///
/// Returns [`UploadError`] when a limit is exceeded or a write fails.
pub async fn store_files(
    store: &dyn BlobStore,
    files: Vec<PendingFile>,
    limits: UploadLimits,
    now: Timestamp,
) -> Result<Vec<UploadedFile>, UploadError> {
    if files.len() > limits.max_files {
        return Err(UploadError::TooManyFiles {
            count: files.len(),
            limit: limits.max_files,
        });
    }
    if let Some(oversize) = files.iter().find(|file| file.size() > limits.max_file_bytes) {
        return Err(UploadError::FileTooLarge {
            name: oversize.name.clone(),
            limit: limits.max_file_bytes,
        });
    }
    let mut uploaded = Vec::with_capacity(files.len());
    let mut used = BTreeSet::new();
    for file in files {
        let size = file.size();
        let name = unique_object_name(&mut used, now, &file.name);
        let url = store
            .put(&name, &file.mime_type, Bytes::from(file.bytes))
            .await
            .map_err(|err| UploadError::Storage(err.to_string()))?;
        uploaded.push(UploadedFile {
            name: file.name,
            mime_type: file.mime_type,
            size,
            url,
        });
    }
    Ok(uploaded)
}

/// Returns an object name for `file_name` not yet present in `used`, and
/// records it.
fn unique_object_name(used: &mut BTreeSet<String>, now: Timestamp, file_name: &str) -> String {
    let mut name = object_name(now, file_name);
    let mut copy = 1;
    while used.contains(&name) {
        name = numbered_object_name(now, file_name, copy);
        copy += 1;
    }
    used.insert(name.clone());
    name
}
