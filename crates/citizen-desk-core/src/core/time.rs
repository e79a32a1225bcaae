// crates/citizen-desk-core/src/core/time.rs
// ============================================================================
// Module: Citizen Desk Time Model
// Description: Canonical timestamp representation for submission records.
// Purpose: Keep store operations deterministic by taking time from the host.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Submissions carry a creation timestamp in unix milliseconds. The store
//! never reads wall-clock time itself; hosts call [`Timestamp::now`] (or
//! supply a fixed value in tests) and pass the result in.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Unix epoch milliseconds.
///
/// # Invariants
/// - No validation is performed; monotonicity is a caller responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Wraps a unix millisecond value.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Reads the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Self(i64::try_from(millis).unwrap_or(i64::MAX))
    }

    /// Returns the timestamp as unix milliseconds.
    #[must_use]
    pub const fn as_unix_millis(self) -> i64 {
        self.0
    }

    /// Converts to a UTC date-time, or `None` when out of range.
    #[must_use]
    pub fn to_utc(self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000).ok()
    }
}
