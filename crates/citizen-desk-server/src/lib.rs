// crates/citizen-desk-server/src/lib.rs
// ============================================================================
// Module: Citizen Desk Server Library
// Description: HTTP service for submissions and attachment uploads.
// Purpose: Expose the desk server, its routes, and audit sinks.
// Dependencies: crate::{api, audit, server}
// ============================================================================

//! ## Overview
//! The server hosts `POST /api/upload`, `GET`/`POST /api/submissions`, and
//! `PUT /api/submissions/{id}/status` over an in-memory submission store.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod api;
pub mod audit;
pub mod server;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::DeskAuditSink;
pub use audit::DeskFileAuditSink;
pub use audit::DeskNoopAuditSink;
pub use audit::DeskStderrAuditSink;
pub use audit::SubmissionAuditEvent;
pub use audit::UploadAuditEvent;
pub use server::DeskServer;
pub use server::ServerError;
