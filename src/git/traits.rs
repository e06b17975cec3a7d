//! git::traits
//!
//! The query surface the version resolver needs from a repository.
//!
//! # Design
//!
//! The trait is synchronous: every query blocks until the underlying
//! process exits. Implementations must not cache; callers may rely on each
//! call observing the live state of the working tree.
//!
//! # Example
//!
//! ```
//! use revisionary::git::{GitError, VersionControl};
//!
//! fn newest_tag(vcs: &impl VersionControl) -> Result<Option<String>, GitError> {
//!     Ok(vcs.list_tags()?.into_iter().next())
//! }
//! ```

use super::interface::GitError;
use crate::core::types::ShortId;

/// Read-only version-control queries.
pub trait VersionControl {
    /// Tags merged into HEAD, sorted by version, newest first.
    ///
    /// Returns an empty list when no tag is reachable.
    fn list_tags(&self) -> Result<Vec<String>, GitError>;

    /// Whether the working tree has uncommitted changes, including
    /// untracked files.
    fn is_dirty(&self) -> Result<bool, GitError>;

    /// Number of commits reachable from HEAD but not from `reference`.
    ///
    /// Fails if `reference` does not resolve to a revision.
    fn commits_since(&self, reference: &str) -> Result<u64, GitError>;

    /// Abbreviated id of the HEAD commit.
    ///
    /// Fails if the repository has no commits.
    fn current_short_id(&self) -> Result<ShortId, GitError>;
}
