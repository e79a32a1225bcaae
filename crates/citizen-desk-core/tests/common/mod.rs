//! Shared fixtures for citizen-desk-core integration tests.
// crates/citizen-desk-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Shared submission fixtures for core integration tests.
// Purpose: Reduce duplication across store, filter, and intake suites.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use citizen_desk_core::NewSubmission;
use citizen_desk_core::ProjectKind;
use citizen_desk_core::SubmissionDetails;

/// Builds store input with the given details and subject.
pub fn new_submission(details: SubmissionDetails, subject: &str) -> NewSubmission {
    NewSubmission {
        details,
        subject: subject.to_string(),
        name: "Shilan Ahmed".to_string(),
        mobile: "07501234567".to_string(),
        address: "Salim Street".to_string(),
        description: "Streetlight has been out for a week".to_string(),
        attachments: Vec::new(),
    }
}

/// Builds a complaint.
pub fn complaint(subject: &str) -> NewSubmission {
    new_submission(SubmissionDetails::Complaint, subject)
}

/// Builds a request with a reason.
pub fn request(subject: &str, reason: &str) -> NewSubmission {
    new_submission(
        SubmissionDetails::Request {
            reason: reason.to_string(),
        },
        subject,
    )
}

/// Builds a project with an optional kind.
pub fn project(subject: &str, kind: Option<ProjectKind>) -> NewSubmission {
    new_submission(
        SubmissionDetails::Project {
            project_kind: kind,
        },
        subject,
    )
}
