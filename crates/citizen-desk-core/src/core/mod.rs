// crates/citizen-desk-core/src/core/mod.rs
// ============================================================================
// Module: Citizen Desk Core Types
// Description: Canonical submission, attachment, and intake structures.
// Purpose: Provide stable, serializable types shared by every Citizen Desk surface.
// Dependencies: serde, thiserror, time
// ============================================================================

//! ## Overview
//! Core types define the closed enumerations (types, statuses, project kinds),
//! the submission record with its type-conditional details, attachments, and
//! the intake rules applied before a record reaches the store.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod intake;
pub mod submission;
pub mod time;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::SubmissionId;
pub use intake::AttachmentIntake;
pub use intake::IntakeOutcome;
pub use intake::MAX_ATTACHMENT_BYTES;
pub use intake::MAX_ATTACHMENTS;
pub use intake::PendingFile;
pub use intake::RequiredField;
pub use intake::SubmissionDraft;
pub use intake::ValidationError;
pub use submission::Attachment;
pub use submission::AttachmentStorage;
pub use submission::NewSubmission;
pub use submission::ProjectKind;
pub use submission::Submission;
pub use submission::SubmissionDetails;
pub use submission::SubmissionStatus;
pub use submission::SubmissionType;
pub use submission::UnknownVariant;
pub use time::Timestamp;
