// crates/citizen-desk-core/src/runtime/store.rs
// ============================================================================
// Module: Citizen Desk Submission Store
// Description: Owned, in-memory, newest-first submission collection.
// Purpose: Provide create, status-update, and filtered read operations.
// Dependencies: crate::core, crate::runtime::filter
// ============================================================================

//! ## Overview
//! [`SubmissionStore`] is an explicitly owned object; hosts inject it where
//! it is needed instead of reaching for shared global state. Nothing is
//! persisted and records live until the store is dropped.
//!
//! ## Invariants
//! - Identifiers are unique and strictly increasing for the store lifetime.
//! - Iteration order is newest-created-first; no operation reorders records.
//! - Only [`SubmissionStore::update_status`] mutates an existing record, and
//!   only its status.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::core::NewSubmission;
use crate::core::Submission;
use crate::core::SubmissionId;
use crate::core::SubmissionStatus;
use crate::core::Timestamp;
use crate::runtime::filter::SubmissionFilter;

// ============================================================================
// SECTION: Store
// ============================================================================

/// In-memory submission collection.
#[derive(Debug, Default, Clone)]
pub struct SubmissionStore {
    /// Records, newest first.
    submissions: VecDeque<Submission>,
    /// Numeric value of the most recently assigned identifier.
    last_id: Option<i64>,
    /// Identifiers issued after the numeric range ran out.
    exhausted: u64,
}

impl SubmissionStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            submissions: VecDeque::new(),
            last_id: None,
            exhausted: 0,
        }
    }

    /// Stores a validated submission and returns the stored record.
    ///
    /// The identifier is the creation time in unix milliseconds, bumped past
    /// the previous identifier when two creations share (or go back in) time.
    /// Once the numeric range is exhausted, identifiers take the form
    /// `<i64::MAX>-<n>`.
    /// Status starts as [`SubmissionStatus::Pending`] and the record is placed
    /// at the front of the collection.
    pub fn create(&mut self, input: NewSubmission, now: Timestamp) -> Submission {
        let id = self.next_id(now);
        let submission = Submission::from_new(id, input, now);
        self.submissions.push_front(submission.clone());
        submission
    }

    /// Sets the status of the submission with `id`.
    ///
    /// Returns `false` and leaves the collection untouched when no record has
    /// that identifier.
    pub fn update_status(&mut self, id: &SubmissionId, status: SubmissionStatus) -> bool {
        match self.submissions.iter_mut().find(|submission| &submission.id == id) {
            Some(submission) => {
                submission.status = status;
                true
            }
            None => false,
        }
    }

    /// Returns a lazy view of the records that satisfy `filter`, in store order.
    #[must_use]
    pub fn filter<'a>(&'a self, filter: &'a SubmissionFilter) -> FilteredSubmissions<'a> {
        FilteredSubmissions {
            inner: self.submissions.iter(),
            filter,
        }
    }

    /// Iterates every record, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Submission> + Clone {
        self.submissions.iter()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &SubmissionId) -> Option<&Submission> {
        self.submissions.iter().find(|submission| &submission.id == id)
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    /// Returns true when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Allocates the next strictly increasing identifier.
    fn next_id(&mut self, now: Timestamp) -> SubmissionId {
        let candidate = now.as_unix_millis();
        let value = match self.last_id {
            Some(last) if candidate <= last => {
                let Some(next) = last.checked_add(1) else {
                    self.exhausted = self.exhausted.saturating_add(1);
                    return SubmissionId::new(format!("{last}-{}", self.exhausted));
                };
                next
            }
            _ => candidate,
        };
        self.last_id = Some(value);
        SubmissionId::new(value.to_string())
    }
}

// ============================================================================
// SECTION: Filtered View
// ============================================================================

/// Restartable, finite view over a store; clone it to iterate again.
#[derive(Debug, Clone)]
pub struct FilteredSubmissions<'a> {
    /// Underlying store iterator.
    inner: vec_deque::Iter<'a, Submission>,
    /// Predicate applied to each record.
    filter: &'a SubmissionFilter,
}

impl<'a> Iterator for FilteredSubmissions<'a> {
    type Item = &'a Submission;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.inner.find(|submission| filter.matches(submission))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
