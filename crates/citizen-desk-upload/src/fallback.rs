// crates/citizen-desk-upload/src/fallback.rs
// ============================================================================
// Module: Attachment Resolution
// Description: Upload-or-fallback conversion of picked files into attachments.
// Purpose: Never lose a submission because durable storage is unavailable.
// Dependencies: rand, citizen-desk-core, crate::client
// ============================================================================

//! ## Overview
//! [`resolve_attachments`] tries a durable upload first. If the upload fails
//! for any reason, every file becomes a transient attachment whose URL is a
//! session-local reference issued by [`TransientRefs`]. Transient references
//! are only meaningful inside the session that issued them.
//!
//! ## Invariants
//! - Either all attachments are durable or all are transient.
//! - Transient references are unique within a [`TransientRefs`] instance.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use citizen_desk_core::Attachment;
use citizen_desk_core::PendingFile;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::client::Uploader;
use crate::ingest::UploadError;
use crate::ingest::UploadedFile;

// ============================================================================
// SECTION: Transient References
// ============================================================================

/// Session-scoped issuer of transient attachment URLs.
#[derive(Debug)]
pub struct TransientRefs {
    /// Random session identifier.
    session: u64,
    /// Next reference number.
    counter: AtomicU64,
}

impl TransientRefs {
    /// Creates an issuer with a fresh random session identifier.
    #[must_use]
    pub fn new() -> Self {
        let mut bytes = [0u8; 8];
        OsRng.fill_bytes(&mut bytes);
        Self::with_session(u64::from_be_bytes(bytes))
    }

    /// Creates an issuer for a known session identifier.
    #[must_use]
    pub const fn with_session(session: u64) -> Self {
        Self {
            session,
            counter: AtomicU64::new(1),
        }
    }

    /// Issues the next transient reference.
    #[must_use]
    pub fn issue(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("blob:{:016x}/{seq}", self.session)
    }
}

impl Default for TransientRefs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Attachments resolved for a submission.
#[derive(Debug)]
pub struct ResolvedAttachments {
    /// Attachments in file order.
    pub attachments: Vec<Attachment>,
    /// Upload failure that forced transient references, if any.
    pub fallback_reason: Option<UploadError>,
}

/// Uploads `files`, falling back to transient references on any failure.
pub async fn resolve_attachments(
    uploader: &dyn Uploader,
    files: &[PendingFile],
    refs: &TransientRefs,
) -> ResolvedAttachments {
    if files.is_empty() {
        return ResolvedAttachments {
            attachments: Vec::new(),
            fallback_reason: None,
        };
    }
    let outcome = match uploader.upload(files).await {
        Ok(uploaded) if uploaded.len() == files.len() => Ok(uploaded),
        Ok(uploaded) => Err(UploadError::Decode(format!(
            "expected {} stored files, got {}",
            files.len(),
            uploaded.len()
        ))),
        Err(err) => Err(err),
    };
    match outcome {
        Ok(uploaded) => ResolvedAttachments {
            attachments: uploaded.into_iter().map(UploadedFile::into_attachment).collect(),
            fallback_reason: None,
        },
        Err(err) => ResolvedAttachments {
            attachments: files
                .iter()
                .map(|file| {
                    Attachment::transient(
                        file.name.clone(),
                        file.mime_type.clone(),
                        file.size(),
                        refs.issue(),
                    )
                })
                .collect(),
            fallback_reason: Some(err),
        },
    }
}
