//! Submission Store
//!
//! Append-only, in-memory list of accepted submissions behind a
//! reader/writer lock. Many snapshot readers may run together; an append
//! excludes everyone for the duration of a single `push`.
//!
//! Nothing is persisted: the store is emptied only by process exit.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::models::types::Submission;

/// Cloning shares the same underlying list
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    submissions: Arc<RwLock<Vec<Submission>>>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return the store size observed under the same lock
    pub fn append(&self, record: Submission) -> usize {
        let mut submissions = self.write();
        submissions.push(record);
        let total = submissions.len();
        debug!(total, "Submission appended");
        total
    }

    /// All records, in append order
    pub fn snapshot(&self) -> Vec<Submission> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panicking holder cannot leave the Vec half-updated (the only mutation
    // is a single push), so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Submission>> {
        self.submissions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Submission>> {
        self.submissions.write().unwrap_or_else(PoisonError::into_inner)
    }
}
