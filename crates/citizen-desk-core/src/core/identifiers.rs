// crates/citizen-desk-core/src/core/identifiers.rs
// ============================================================================
// Module: Citizen Desk Identifiers
// Description: Opaque identifier for stored submissions.
// Purpose: Provide a strongly typed, serializable ID with a stable string form.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Submission identifiers are opaque strings assigned by the store at
//! creation. They serialize transparently so HTTP clients see plain strings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Submission identifier, unique within a store for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    /// Creates a new submission identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SubmissionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SubmissionId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
