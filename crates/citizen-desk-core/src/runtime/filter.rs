// crates/citizen-desk-core/src/runtime/filter.rs
// ============================================================================
// Module: Citizen Desk Submission Filter
// Description: Type, status, and free-text predicates over submissions.
// Purpose: Describe a listing view without mutating or reordering the store.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! A [`SubmissionFilter`] combines three predicates with logical AND:
//! a type filter, a status filter, and a case-insensitive substring search
//! over subject, name, description, and (for requests) reason. Project kind
//! and attachments are never searched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;

use thiserror::Error;

use crate::core::Submission;
use crate::core::SubmissionStatus;
use crate::core::SubmissionType;

/// Filter identifier that matches every value.
const ALL: &str = "all";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error returned for filter identifiers outside `all` and the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} filter: {value}")]
pub struct FilterParseError {
    /// Filter label (`type` or `status`).
    pub kind: &'static str,
    /// Rejected input value.
    pub value: String,
}

// ============================================================================
// SECTION: Filter Types
// ============================================================================

/// Type predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Every type matches.
    #[default]
    All,
    /// Only the given type matches.
    Only(SubmissionType),
}

impl TypeFilter {
    /// Returns true when `kind` passes this filter.
    #[must_use]
    pub fn matches(self, kind: SubmissionType) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == kind,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only).map_err(|_| FilterParseError {
            kind: "type",
            value: value.to_string(),
        })
    }
}

/// Status predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every status matches.
    #[default]
    All,
    /// Only the given status matches.
    Only(SubmissionStatus),
}

impl StatusFilter {
    /// Returns true when `status` passes this filter.
    #[must_use]
    pub fn matches(self, status: SubmissionStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only).map_err(|_| FilterParseError {
            kind: "status",
            value: value.to_string(),
        })
    }
}

/// Combined listing predicate.
///
/// # Invariants
/// - `needle` is stored already case-folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFilter {
    /// Type predicate.
    kind: TypeFilter,
    /// Status predicate.
    status: StatusFilter,
    /// Case-folded search text; empty matches everything.
    needle: String,
}

impl SubmissionFilter {
    /// Builds a filter, folding `search` to lowercase.
    #[must_use]
    pub fn new(kind: TypeFilter, status: StatusFilter, search: &str) -> Self {
        Self {
            kind,
            status,
            needle: search.to_lowercase(),
        }
    }

    /// Returns a filter that matches every submission.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns the type predicate.
    #[must_use]
    pub const fn kind(&self) -> TypeFilter {
        self.kind
    }

    /// Returns the status predicate.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns true when `submission` satisfies all three predicates.
    #[must_use]
    pub fn matches(&self, submission: &Submission) -> bool {
        self.kind.matches(submission.kind())
            && self.status.matches(submission.status)
            && self.matches_text(submission)
    }

    /// Free-text predicate.
    fn matches_text(&self, submission: &Submission) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let needle = self.needle.as_str();
        [
            Some(submission.subject.as_str()),
            Some(submission.name.as_str()),
            Some(submission.description.as_str()),
            submission.details.reason(),
        ]
        .into_iter()
        .flatten()
        .any(|haystack| haystack.to_lowercase().contains(needle))
    }
}
