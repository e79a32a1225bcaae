// crates/citizen-desk-core/src/runtime/mod.rs
// ============================================================================
// Module: Citizen Desk Runtime
// Description: In-memory submission store and filtered views.
// Purpose: Own the submission collection and expose its operations.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime owns mutable state: the [`SubmissionStore`] and the
//! [`SubmissionFilter`] used by listing views.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod filter;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use filter::FilterParseError;
pub use filter::StatusFilter;
pub use filter::SubmissionFilter;
pub use filter::TypeFilter;
pub use store::FilteredSubmissions;
pub use store::SubmissionStore;
