// crates/citizen-desk-core/src/core/intake.rs
// ============================================================================
// Module: Citizen Desk Intake
// Description: Form-level validation and attachment intake limits.
// Purpose: Reject incomplete submissions and oversize/excess files before storage.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Intake sits between the submission form and the store. A
//! [`SubmissionDraft`] holds raw form text; [`SubmissionDraft::validate`]
//! turns it into a [`NewSubmission`] or a [`ValidationError`] that names the
//! catalog key of the notice to show the user. Validation failures never
//! touch the store.
//!
//! [`AttachmentIntake`] applies the per-file size cap and the per-submission
//! file cap while files are being picked, independent of the order in which
//! they arrive.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::submission::Attachment;
use crate::core::submission::NewSubmission;
use crate::core::submission::ProjectKind;
use crate::core::submission::SubmissionDetails;
use crate::core::submission::SubmissionType;
use crate::core::submission::UnknownVariant;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum number of attachments per submission.
pub const MAX_ATTACHMENTS: usize = 5;
/// Maximum size of a single attachment in bytes (10 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Catalog key shown for missing required fields.
const NOTICE_REQUIRED: &str = "form.requiredNote";
/// Catalog key shown when a request has no reason.
const NOTICE_REASON: &str = "form.reason";
/// Catalog key shown for attachment limit violations.
const NOTICE_FILES: &str = "form.filesHelp";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Required free-text form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// Subject line.
    Subject,
    /// Reporter name.
    Name,
    /// Mobile number.
    Mobile,
    /// Address.
    Address,
    /// Description.
    Description,
}

impl RequiredField {
    /// Returns the stable field label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Name => "name",
            Self::Mobile => "mobile",
            Self::Address => "address",
            Self::Description => "description",
        }
    }
}

/// Intake validation failures.
///
/// # Invariants
/// - Variants are stable for error classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No submission type was chosen.
    #[error("submission type is required")]
    MissingType,
    /// Submission type is outside the closed set.
    #[error(transparent)]
    InvalidType(UnknownVariant),
    /// A required field is blank.
    #[error("{} is required", .0.as_str())]
    MissingField(RequiredField),
    /// Request submitted without a reason.
    #[error("reason is required for requests")]
    MissingReason,
    /// Project kind is outside the closed set.
    #[error(transparent)]
    InvalidProjectKind(UnknownVariant),
    /// More attachments than allowed.
    #[error("too many attachments: {count}")]
    TooManyAttachments {
        /// Number of attachments supplied.
        count: usize,
    },
    /// An attachment exceeds the size cap.
    #[error("attachment {name} exceeds the size limit")]
    AttachmentTooLarge {
        /// Offending file name.
        name: String,
    },
}

impl ValidationError {
    /// Returns the catalog key of the user-facing notice for this failure.
    #[must_use]
    pub const fn notice_key(&self) -> &'static str {
        match self {
            Self::MissingReason => NOTICE_REASON,
            Self::TooManyAttachments {
                ..
            }
            | Self::AttachmentTooLarge {
                ..
            } => NOTICE_FILES,
            Self::MissingType
            | Self::InvalidType(_)
            | Self::MissingField(_)
            | Self::InvalidProjectKind(_) => NOTICE_REQUIRED,
        }
    }
}

// ============================================================================
// SECTION: Submission Draft
// ============================================================================

/// Raw submission form contents.
///
/// Empty strings mean "not filled in". `reason` is only read for requests and
/// `project_kind` only for projects; both are discarded for other types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionDraft {
    /// Selected submission type identifier.
    #[serde(rename = "type")]
    pub kind: String,
    /// Subject line.
    pub subject: String,
    /// Reporter full name.
    pub name: String,
    /// Reporter mobile number.
    pub mobile: String,
    /// Reporter address.
    pub address: String,
    /// Free-form description.
    pub description: String,
    /// Reason (requests only).
    pub reason: String,
    /// Project kind identifier (projects only, optional).
    pub project_kind: String,
    /// Attachments resolved by the upload step.
    pub attachments: Vec<Attachment>,
}

impl SubmissionDraft {
    /// Validates the draft and converts it into store input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for the first failed check, in form order:
    /// type, required fields, reason, project kind, attachments.
    pub fn validate(self) -> Result<NewSubmission, ValidationError> {
        if self.kind.trim().is_empty() {
            return Err(ValidationError::MissingType);
        }
        let kind: SubmissionType = self.kind.trim().parse().map_err(ValidationError::InvalidType)?;
        let required = [
            (RequiredField::Subject, &self.subject),
            (RequiredField::Name, &self.name),
            (RequiredField::Mobile, &self.mobile),
            (RequiredField::Address, &self.address),
            (RequiredField::Description, &self.description),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        let details = match kind {
            SubmissionType::Complaint => SubmissionDetails::Complaint,
            SubmissionType::Suggestion => SubmissionDetails::Suggestion,
            SubmissionType::Request => {
                if self.reason.trim().is_empty() {
                    return Err(ValidationError::MissingReason);
                }
                SubmissionDetails::Request {
                    reason: self.reason,
                }
            }
            SubmissionType::Project => {
                let project_kind = match self.project_kind.trim() {
                    "" => None,
                    value => Some(
                        value
                            .parse::<ProjectKind>()
                            .map_err(ValidationError::InvalidProjectKind)?,
                    ),
                };
                SubmissionDetails::Project {
                    project_kind,
                }
            }
        };
        if self.attachments.len() > MAX_ATTACHMENTS {
            return Err(ValidationError::TooManyAttachments {
                count: self.attachments.len(),
            });
        }
        if let Some(oversize) =
            self.attachments.iter().find(|attachment| attachment.size > MAX_ATTACHMENT_BYTES)
        {
            return Err(ValidationError::AttachmentTooLarge {
                name: oversize.name.clone(),
            });
        }
        Ok(NewSubmission {
            details,
            subject: self.subject,
            name: self.name,
            mobile: self.mobile,
            address: self.address,
            description: self.description,
            attachments: self.attachments,
        })
    }
}

// ============================================================================
// SECTION: Attachment Intake
// ============================================================================

/// File picked for upload but not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// File name.
    pub name: String,
    /// MIME type hint (unvalidated).
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl PendingFile {
    /// Creates a pending file.
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }
}

/// Result of offering a file to [`AttachmentIntake`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// File held for upload.
    Accepted,
    /// File exceeds [`MAX_ATTACHMENT_BYTES`].
    TooLarge,
    /// [`MAX_ATTACHMENTS`] files are already held.
    LimitReached,
}

/// Files selected for one submission, bounded by the intake limits.
///
/// # Invariants
/// - Never holds more than [`MAX_ATTACHMENTS`] files.
/// - Never holds a file larger than [`MAX_ATTACHMENT_BYTES`].
#[derive(Debug, Clone, Default)]
pub struct AttachmentIntake {
    /// Accepted files in selection order.
    files: Vec<PendingFile>,
}

impl AttachmentIntake {
    /// Creates an empty intake.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: Vec::new(),
        }
    }

    /// Offers one file; oversize files are rejected before the count cap applies.
    pub fn offer(&mut self, file: PendingFile) -> IntakeOutcome {
        if file.size() > MAX_ATTACHMENT_BYTES {
            return IntakeOutcome::TooLarge;
        }
        if self.files.len() >= MAX_ATTACHMENTS {
            return IntakeOutcome::LimitReached;
        }
        self.files.push(file);
        IntakeOutcome::Accepted
    }

    /// Offers several files in order and reports each outcome.
    pub fn offer_all(&mut self, files: impl IntoIterator<Item = PendingFile>) -> Vec<IntakeOutcome> {
        files.into_iter().map(|file| self.offer(file)).collect()
    }

    /// Removes the file at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<PendingFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    /// Returns the accepted files.
    #[must_use]
    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    /// Returns the number of accepted files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true when no file has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Consumes the intake and returns the accepted files.
    #[must_use]
    pub fn into_files(self) -> Vec<PendingFile> {
        self.files
    }
}
