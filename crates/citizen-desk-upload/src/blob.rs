// crates/citizen-desk-upload/src/blob.rs
// ============================================================================
// Module: Blob Stores
// Description: Durable object storage interface and in-memory backend.
// Purpose: Persist uploaded attachment bytes and return retrievable URLs.
// Dependencies: async-trait, bytes, thiserror
// ============================================================================

//! ## Overview
//! A [`BlobStore`] writes one object per uploaded file and returns the URL
//! under which it can be fetched. Object names are derived from the upload
//! time and the final path segment of the client-supplied file name.
//!
//! ## Invariants
//! - Object names never contain client-supplied directory segments.
//! - A failed `put` leaves no partial object visible to readers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::PoisonError;

use async_trait::async_trait;
use bytes::Bytes;
use citizen_desk_core::Timestamp;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Folder under which every attachment object is written.
pub const OBJECT_FOLDER: &str = "submissions";

/// File name used when a client supplies none.
const FALLBACK_FILE_NAME: &str = "file";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Blob storage errors.
#[derive(Debug, Error)]
pub enum BlobStoreError {
    /// Store configuration or object name is invalid.
    #[error("blob store invalid: {0}")]
    Invalid(String),
    /// Backend write failed.
    #[error("blob store io error: {0}")]
    Io(String),
}

// ============================================================================
// SECTION: Store Trait
// ============================================================================

/// Durable object storage for attachment bytes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes `bytes` under `object_name` and returns its public URL.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the object cannot be written.
    async fn put(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, BlobStoreError>;
}

/// Builds the object name for a file uploaded at `now`.
#[must_use]
pub fn object_name(now: Timestamp, file_name: &str) -> String {
    format!("{OBJECT_FOLDER}/{}-{}", now.as_unix_millis(), base_name(file_name))
}

/// Builds the object name for the `copy`-th repeat of a file name uploaded at
/// `now`. Copy numbers start at 1.
#[must_use]
pub fn numbered_object_name(now: Timestamp, file_name: &str, copy: usize) -> String {
    format!("{OBJECT_FOLDER}/{}-{copy}-{}", now.as_unix_millis(), base_name(file_name))
}

/// Final path segment of `file_name`, or the fallback name when empty.
fn base_name(file_name: &str) -> &str {
    let base = file_name.rsplit(['/', '\\']).next().map(str::trim).unwrap_or_default();
    if base.is_empty() || base == "." || base == ".." { FALLBACK_FILE_NAME } else { base }
}

// ============================================================================
// SECTION: Memory Store
// ============================================================================

/// Object held by [`InMemoryBlobStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Content type recorded at upload.
    pub content_type: String,
    /// Object bytes.
    pub bytes: Bytes,
}

/// Blob store held in memory, addressed by `memory://` URLs.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    /// Stored objects by name.
    objects: Mutex<BTreeMap<String, StoredObject>>,
}

impl InMemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the object stored under `object_name`.
    #[must_use]
    pub fn get(&self, object_name: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap_or_else(PoisonError::into_inner).get(object_name).cloned()
    }

    /// Returns every stored object name in order.
    #[must_use]
    pub fn object_names(&self) -> Vec<String> {
        self.objects.lock().unwrap_or_else(PoisonError::into_inner).keys().cloned().collect()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, BlobStoreError> {
        if object_name.trim().is_empty() {
            return Err(BlobStoreError::Invalid("object name must be non-empty".to_string()));
        }
        self.objects.lock().unwrap_or_else(PoisonError::into_inner).insert(
            object_name.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(format!("memory://{object_name}"))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
