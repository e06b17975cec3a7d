//! git::mock
//!
//! In-memory [`VersionControl`] implementation for deterministic testing.
//!
//! # Design
//!
//! The mock answers every query from configured state and records each
//! call, so tests can assert both the resolved version and the exact
//! sequence of queries the resolver made. Failures are injected per query.
//!
//! # Example
//!
//! ```
//! use revisionary::git::mock::{MockOperation, MockRepository};
//! use revisionary::git::VersionControl;
//!
//! let repo = MockRepository::new()
//!     .with_tags(["1.0.1", "0.1.2"])
//!     .with_distance("1.0.1", 2)
//!     .with_short_id("abc123d");
//!
//! assert_eq!(repo.commits_since("1.0.1").unwrap(), 2);
//! assert_eq!(
//!     repo.operations(),
//!     vec![MockOperation::CommitsSince("1.0.1".to_string())]
//! );
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use super::interface::GitError;
use super::traits::VersionControl;
use crate::core::types::ShortId;

/// Which query should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    /// Fail `list_tags`.
    ListTags,
    /// Fail `is_dirty`.
    IsDirty,
    /// Fail `commits_since` for every reference.
    CommitsSince,
    /// Fail `current_short_id`.
    CurrentShortId,
}

/// Recorded query for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    ListTags,
    IsDirty,
    CommitsSince(String),
    CurrentShortId,
}

/// Mock repository for testing.
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: Vec<String>,
    dirty: bool,
    distances: HashMap<String, u64>,
    short_id: Option<ShortId>,
    fail_on: Option<FailOn>,
    operations: RefCell<Vec<MockOperation>>,
}

impl MockRepository {
    /// Create an empty mock: no tags, clean tree, no commits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag list, newest first.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dirty flag.
    pub fn dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    /// Set the commit distance between `reference` and HEAD.
    ///
    /// References without a configured distance fail like an unknown
    /// revision would.
    pub fn with_distance(mut self, reference: impl Into<String>, distance: u64) -> Self {
        self.distances.insert(reference.into(), distance);
        self
    }

    /// Set the HEAD short id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a valid short id.
    pub fn with_short_id(mut self, id: &str) -> Self {
        self.short_id = Some(ShortId::new(id).unwrap_or_else(|e| panic!("{e}")));
        self
    }

    /// Configure the mock to fail on a specific query.
    pub fn fail_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = Some(fail_on);
        self
    }

    /// Get all recorded queries, in call order.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.operations.borrow().clone()
    }

    /// Clear recorded queries.
    pub fn clear_operations(&self) {
        self.operations.borrow_mut().clear();
    }

    fn record(&self, op: MockOperation) {
        self.operations.borrow_mut().push(op);
    }

    fn check_fail(&self, query: FailOn, command: &str) -> Result<(), GitError> {
        if self.fail_on == Some(query) {
            return Err(failure(command, "fatal: injected failure"));
        }
        Ok(())
    }
}

fn failure(command: &str, stderr: &str) -> GitError {
    GitError::CommandFailed {
        command: format!("mock {command}"),
        code: Some(128),
        stderr: stderr.to_string(),
    }
}

impl VersionControl for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>, GitError> {
        self.record(MockOperation::ListTags);
        self.check_fail(FailOn::ListTags, "tag")?;
        Ok(self.tags.clone())
    }

    fn is_dirty(&self) -> Result<bool, GitError> {
        self.record(MockOperation::IsDirty);
        self.check_fail(FailOn::IsDirty, "status")?;
        Ok(self.dirty)
    }

    fn commits_since(&self, reference: &str) -> Result<u64, GitError> {
        self.record(MockOperation::CommitsSince(reference.to_string()));
        self.check_fail(FailOn::CommitsSince, "rev-list")?;
        self.distances.get(reference).copied().ok_or_else(|| {
            failure(
                "rev-list",
                &format!("fatal: ambiguous argument '{reference}..HEAD': unknown revision"),
            )
        })
    }

    fn current_short_id(&self) -> Result<ShortId, GitError> {
        self.record(MockOperation::CurrentShortId);
        self.check_fail(FailOn::CurrentShortId, "rev-parse")?;
        self.short_id.clone().ok_or_else(|| {
            failure(
                "rev-parse",
                "fatal: ambiguous argument 'HEAD': unknown revision",
            )
        })
    }
}
