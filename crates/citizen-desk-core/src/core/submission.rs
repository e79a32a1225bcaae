// crates/citizen-desk-core/src/core/submission.rs
// ============================================================================
// Module: Citizen Desk Submission Model
// Description: Submission records, closed enumerations, and attachments.
// Purpose: Make type-conditional fields statically checkable via a tagged union.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A submission is one citizen-filed record. Its type decides which optional
//! fields exist: only requests carry a reason and only projects carry a
//! project kind. [`SubmissionDetails`] encodes that as a sum type so a
//! complaint with a reason cannot be constructed.
//!
//! The identifiers of every closed enumeration here are a wire contract
//! (`complaint`, `in-progress`, `software`, ...) and must stay stable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::SubmissionId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error returned when parsing an identifier outside a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    /// Enumeration label (for example, `submission type`).
    pub kind: &'static str,
    /// Rejected input value.
    pub value: String,
}

// ============================================================================
// SECTION: Closed Enumerations
// ============================================================================

/// Submission type.
///
/// # Invariants
/// - Variants and their string forms are stable contract identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    /// Complaint about a public service.
    Complaint,
    /// Suggestion for improvement.
    Suggestion,
    /// Project proposal.
    Project,
    /// Request (for example, a visit request).
    Request,
}

impl SubmissionType {
    /// All submission types in presentation order.
    pub const ALL: [Self; 4] = [Self::Complaint, Self::Suggestion, Self::Project, Self::Request];

    /// Returns the stable identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complaint => "complaint",
            Self::Suggestion => "suggestion",
            Self::Project => "project",
            Self::Request => "request",
        }
    }
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value).ok_or_else(|| UnknownVariant {
            kind: "submission type",
            value: value.to_string(),
        })
    }
}

/// Submission processing status.
///
/// # Invariants
/// - Transitions are unrestricted; any status may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Newly filed (default at creation).
    #[default]
    #[serde(rename = "pending")]
    Pending,
    /// Being handled.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Closed out.
    #[serde(rename = "resolved")]
    Resolved,
}

impl SubmissionStatus {
    /// All statuses in presentation order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    /// Returns the stable identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|status| status.as_str() == value).ok_or_else(|| {
            UnknownVariant {
                kind: "submission status",
                value: value.to_string(),
            }
        })
    }
}

/// Project category, only meaningful for project submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    /// Software project.
    Software,
    /// Construction project.
    Construction,
    /// Community project.
    Community,
    /// Anything else.
    Other,
}

impl ProjectKind {
    /// All project kinds in presentation order.
    pub const ALL: [Self; 4] = [Self::Software, Self::Construction, Self::Community, Self::Other];

    /// Returns the stable identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Construction => "construction",
            Self::Community => "community",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value).ok_or_else(|| UnknownVariant {
            kind: "project kind",
            value: value.to_string(),
        })
    }
}

// ============================================================================
// SECTION: Type-Conditional Details
// ============================================================================

/// Type discriminant plus the fields that only exist for that type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmissionDetails {
    /// Complaint (no extra fields).
    Complaint,
    /// Suggestion (no extra fields).
    Suggestion,
    /// Project with an optional category.
    Project {
        /// Project category when the submitter picked one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        project_kind: Option<ProjectKind>,
    },
    /// Request with its mandatory reason.
    Request {
        /// Reason for the request.
        reason: String,
    },
}

impl SubmissionDetails {
    /// Returns the submission type discriminant.
    #[must_use]
    pub const fn kind(&self) -> SubmissionType {
        match self {
            Self::Complaint => SubmissionType::Complaint,
            Self::Suggestion => SubmissionType::Suggestion,
            Self::Project {
                ..
            } => SubmissionType::Project,
            Self::Request {
                ..
            } => SubmissionType::Request,
        }
    }

    /// Returns the reason when this is a request.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Request {
                reason,
            } => Some(reason),
            _ => None,
        }
    }

    /// Returns the project kind when this is a project with a category.
    #[must_use]
    pub const fn project_kind(&self) -> Option<ProjectKind> {
        match self {
            Self::Project {
                project_kind,
            } => *project_kind,
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Attachments
// ============================================================================

/// Durability of an attachment URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentStorage {
    /// Stored by the upload collaborator; the URL outlives the session.
    #[default]
    Durable,
    /// Session-local reference produced after an upload failure. Never persisted.
    Transient,
}

/// File attached to a submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name.
    pub name: String,
    /// MIME type as reported by the client (unvalidated).
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Retrieval URL.
    pub url: String,
    /// Whether the URL is durable or session-local.
    #[serde(default)]
    pub storage: AttachmentStorage,
}

impl Attachment {
    /// Builds an attachment backed by durable storage.
    #[must_use]
    pub fn durable(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            url: url.into(),
            storage: AttachmentStorage::Durable,
        }
    }

    /// Builds a transient, session-local attachment reference.
    #[must_use]
    pub fn transient(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            url: url.into(),
            storage: AttachmentStorage::Transient,
        }
    }

    /// Returns true when the URL survives the current session.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        matches!(self.storage, AttachmentStorage::Durable)
    }
}

// ============================================================================
// SECTION: Submission Records
// ============================================================================

/// Validated submission input, before the store assigns id, status, and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubmission {
    /// Type discriminant and type-conditional fields.
    #[serde(flatten)]
    pub details: SubmissionDetails,
    /// Subject line.
    pub subject: String,
    /// Reporter full name.
    pub name: String,
    /// Reporter mobile number (unvalidated).
    pub mobile: String,
    /// Reporter address.
    pub address: String,
    /// Free-form description.
    pub description: String,
    /// Attachments accepted at intake.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Stored submission record.
///
/// # Invariants
/// - `id` is unique within the owning store.
/// - Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Store-assigned identifier.
    pub id: SubmissionId,
    /// Type discriminant and type-conditional fields.
    #[serde(flatten)]
    pub details: SubmissionDetails,
    /// Subject line.
    pub subject: String,
    /// Reporter full name.
    pub name: String,
    /// Reporter mobile number (unvalidated).
    pub mobile: String,
    /// Reporter address.
    pub address: String,
    /// Free-form description.
    pub description: String,
    /// Attachments, fixed at creation.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Processing status.
    pub status: SubmissionStatus,
    /// Creation time.
    pub created_at: Timestamp,
}

impl Submission {
    /// Builds a stored record from validated input.
    #[must_use]
    pub fn from_new(id: SubmissionId, input: NewSubmission, created_at: Timestamp) -> Self {
        Self {
            id,
            details: input.details,
            subject: input.subject,
            name: input.name,
            mobile: input.mobile,
            address: input.address,
            description: input.description,
            attachments: input.attachments,
            status: SubmissionStatus::Pending,
            created_at,
        }
    }

    /// Returns the submission type.
    #[must_use]
    pub const fn kind(&self) -> SubmissionType {
        self.details.kind()
    }
}
