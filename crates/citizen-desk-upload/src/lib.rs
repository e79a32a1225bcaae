// crates/citizen-desk-upload/src/lib.rs
// ============================================================================
// Module: Citizen Desk Upload Library
// Description: Attachment upload collaborator for Citizen Desk.
// Purpose: Store attachment bytes durably, or fall back to transient references.
// Dependencies: crate::{blob, client, fallback, ingest, s3}
// ============================================================================

//! ## Overview
//! The upload collaborator has a server half ([`store_files`] over a
//! [`BlobStore`]) and a client half ([`HttpUploader`] plus
//! [`resolve_attachments`]). S3 support is behind the default `s3` feature.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod blob;
pub mod client;
pub mod fallback;
pub mod ingest;
#[cfg(feature = "s3")]
pub mod s3;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use blob::BlobStore;
pub use blob::BlobStoreError;
pub use blob::InMemoryBlobStore;
pub use blob::StoredObject;
pub use blob::object_name;
pub use blob::numbered_object_name;
pub use client::HttpUploader;
pub use client::Uploader;
pub use fallback::ResolvedAttachments;
pub use fallback::TransientRefs;
pub use fallback::resolve_attachments;
pub use ingest::UploadError;
pub use ingest::UploadLimits;
pub use ingest::UploadResponse;
pub use ingest::UploadedFile;
pub use ingest::store_files;
#[cfg(feature = "s3")]
pub use s3::S3BlobStore;
