// crates/citizen-desk-core/src/lib.rs
// ============================================================================
// Module: Citizen Desk Core Library
// Description: Public API surface for the Citizen Desk core.
// Purpose: Expose submission types, intake validation, and the in-memory store.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Citizen Desk core models citizen submissions (complaints, suggestions,
//! projects, requests), validates form intake, and owns the in-memory
//! submission collection with its filtered views. It has no persistence and
//! never reads wall-clock time; hosts supply timestamps.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use runtime::FilterParseError;
pub use runtime::StatusFilter;
pub use runtime::SubmissionFilter;
pub use runtime::SubmissionStore;
pub use runtime::TypeFilter;
