// crates/citizen-desk-server/src/audit.rs
// ============================================================================
// Module: Desk Audit Logging
// Description: Structured audit events for submission and upload handling.
// Purpose: Emit JSON-line audit records without a hard logging dependency.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Audit events are serialized as one JSON object per line. Sinks route them
//! to stderr, an append-only file, or nowhere. Events never carry reporter
//! contact details or file contents.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use citizen_desk_core::SubmissionId;
use citizen_desk_core::SubmissionStatus;
use citizen_desk_core::SubmissionType;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Submission lifecycle audit event.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Submission identifier.
    pub submission_id: String,
    /// Submission type, for creations.
    pub submission_type: Option<&'static str>,
    /// Status after the event.
    pub status: &'static str,
    /// Attachment count, for creations.
    pub attachments: Option<usize>,
    /// Whether a status update matched a stored record.
    pub applied: bool,
}

impl SubmissionAuditEvent {
    /// Audit event for a newly created submission.
    #[must_use]
    pub fn created(
        id: &SubmissionId,
        kind: SubmissionType,
        status: SubmissionStatus,
        attachments: usize,
    ) -> Self {
        Self {
            event: "submission_created",
            timestamp_ms: now_millis(),
            submission_id: id.to_string(),
            submission_type: Some(kind.as_str()),
            status: status.as_str(),
            attachments: Some(attachments),
            applied: true,
        }
    }

    /// Audit event for a status update; `applied` is false for unknown ids.
    #[must_use]
    pub fn status_updated(id: &SubmissionId, status: SubmissionStatus, applied: bool) -> Self {
        Self {
            event: "submission_status_updated",
            timestamp_ms: now_millis(),
            submission_id: id.to_string(),
            submission_type: None,
            status: status.as_str(),
            attachments: None,
            applied,
        }
    }
}

/// Upload audit event.
#[derive(Debug, Clone, Serialize)]
pub struct UploadAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Files in the request.
    pub files: usize,
    /// Total bytes in the request.
    pub total_bytes: u64,
    /// Failure description when the upload failed.
    pub error: Option<String>,
}

impl UploadAuditEvent {
    /// Audit event for a stored batch.
    #[must_use]
    pub fn completed(files: usize, total_bytes: u64) -> Self {
        Self {
            event: "upload_completed",
            timestamp_ms: now_millis(),
            files,
            total_bytes,
            error: None,
        }
    }

    /// Audit event for a rejected or failed batch.
    #[must_use]
    pub fn failed(files: usize, total_bytes: u64, error: impl Into<String>) -> Self {
        Self {
            event: "upload_failed",
            timestamp_ms: now_millis(),
            files,
            total_bytes,
            error: Some(error.into()),
        }
    }
}

/// Returns the current time in milliseconds since the Unix epoch.
fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for desk events.
pub trait DeskAuditSink: Send + Sync {
    /// Record a submission event.
    fn record_submission(&self, event: &SubmissionAuditEvent);

    /// Record an upload event.
    fn record_upload(&self, event: &UploadAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct DeskStderrAuditSink;

impl DeskAuditSink for DeskStderrAuditSink {
    fn record_submission(&self, event: &SubmissionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }

    fn record_upload(&self, event: &UploadAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct DeskFileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl DeskFileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one serialized event.
    fn append(&self, payload: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

impl DeskAuditSink for DeskFileAuditSink {
    fn record_submission(&self, event: &SubmissionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            self.append(&payload);
        }
    }

    fn record_upload(&self, event: &UploadAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            self.append(&payload);
        }
    }
}

/// No-op audit sink.
pub struct DeskNoopAuditSink;

impl DeskAuditSink for DeskNoopAuditSink {
    fn record_submission(&self, _event: &SubmissionAuditEvent) {}

    fn record_upload(&self, _event: &UploadAuditEvent) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use citizen_desk_core::SubmissionId;
    use citizen_desk_core::SubmissionStatus;
    use citizen_desk_core::SubmissionType;
    use serde_json::Value;

    use super::DeskAuditSink;
    use super::DeskFileAuditSink;
    use super::SubmissionAuditEvent;
    use super::UploadAuditEvent;

    #[test]
    fn file_sink_appends_one_json_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let sink = DeskFileAuditSink::new(&path).unwrap();
        let id = SubmissionId::new("1709985600000");
        sink.record_submission(&SubmissionAuditEvent::created(
            &id,
            SubmissionType::Request,
            SubmissionStatus::Pending,
            2,
        ));
        sink.record_upload(&UploadAuditEvent::failed(6, 60, "too many files"));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<Value> =
            content.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "submission_created");
        assert_eq!(lines[0]["submission_type"], "request");
        assert_eq!(lines[0]["attachments"], 2);
        assert_eq!(lines[1]["event"], "upload_failed");
        assert_eq!(lines[1]["error"], "too many files");
    }

    #[test]
    fn status_update_records_whether_it_applied() {
        let event =
            SubmissionAuditEvent::status_updated(&SubmissionId::new("x"), SubmissionStatus::Resolved, false);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "submission_status_updated");
        assert_eq!(value["status"], "resolved");
        assert_eq!(value["applied"], false);
        assert!(value["submission_type"].is_null());
    }
}
