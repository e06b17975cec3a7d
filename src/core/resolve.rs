//! core::resolve
//!
//! Version resolution from repository state.
//!
//! # Algorithm
//!
//! 1. List tags merged into HEAD, newest version first. No tags is an error.
//! 2. Take the newest tag as the base. If it is not a PEP 440 version, fail;
//!    older tags are never consulted.
//! 3. Count commits since the base. A non-zero distance adds
//!    `.dev<N>+git.<short-id>`.
//! 4. A dirty working tree adds `.dirty`, regardless of distance.
//!
//! The composed string is not validated here; [`get_verified_version`]
//! does that for callers that need a guaranteed PEP 440 result.
//!
//! # Example
//!
//! ```
//! use revisionary::core::resolve::get_version;
//! use revisionary::git::mock::MockRepository;
//!
//! let repo = MockRepository::new()
//!     .with_tags(["1.0.1"])
//!     .with_distance("1.0.1", 2)
//!     .with_short_id("abc123d");
//!
//! assert_eq!(get_version(&repo).unwrap(), "1.0.1.dev2+git.abc123d");
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use super::types::ShortId;
use super::version;
use crate::git::{GitError, VersionControl};

/// Errors from version resolution.
#[derive(Debug, Error)]
pub enum VersionError {
    /// No tag is reachable from HEAD.
    #[error("no tags found in the repository; create a version tag first")]
    NoTags,

    /// The newest tag is not a PEP 440 version.
    #[error("latest tag '{tag}' is not a PEP 440 version; fix the tag name")]
    InvalidBaseTag {
        /// The offending tag
        tag: String,
    },

    /// The composed version string is not a PEP 440 version.
    #[error("resolved version '{version}' is not a PEP 440 version")]
    InvalidVersion {
        /// The composed version
        version: String,
    },

    /// A repository query failed.
    #[error(transparent)]
    Execution(#[from] GitError),
}

/// The components of a resolved version.
///
/// `Display` renders `<base-tag>[.dev<N>+git.<short-id>][.dirty]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Newest tag merged into HEAD.
    pub base_tag: String,
    /// Commits between the base tag and HEAD.
    pub distance: u64,
    /// Abbreviated HEAD id; present iff `distance > 0`.
    pub short_id: Option<ShortId>,
    /// Whether the working tree had uncommitted changes.
    pub dirty: bool,
}

impl VersionInfo {
    /// Whether HEAD sits exactly on the base tag with a clean tree.
    pub fn is_release(&self) -> bool {
        self.distance == 0 && !self.dirty
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_tag)?;
        if let Some(short_id) = &self.short_id {
            write!(f, ".dev{}+git.{}", self.distance, short_id)?;
        }
        if self.dirty {
            write!(f, ".dirty")?;
        }
        Ok(())
    }
}

impl Serialize for VersionInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            version: String,
            base_tag: &'a str,
            distance: u64,
            short_id: Option<&'a ShortId>,
            dirty: bool,
        }

        Repr {
            version: self.to_string(),
            base_tag: &self.base_tag,
            distance: self.distance,
            short_id: self.short_id.as_ref(),
            dirty: self.dirty,
        }
        .serialize(serializer)
    }
}

/// Resolve the version components of `repo`.
///
/// Queries run in a fixed order: tags, distance, short id (only when the
/// distance is non-zero), dirty state.
///
/// # Errors
///
/// - [`VersionError::NoTags`] if no tag is reachable from HEAD
/// - [`VersionError::InvalidBaseTag`] if the newest tag is not PEP 440
/// - [`VersionError::Execution`] if any query fails
pub fn resolve(repo: &impl VersionControl) -> Result<VersionInfo, VersionError> {
    let base_tag = repo
        .list_tags()?
        .into_iter()
        .next()
        .ok_or(VersionError::NoTags)?;
    debug!(tag = %base_tag, "newest tag");

    if !version::is_valid(&base_tag) {
        return Err(VersionError::InvalidBaseTag { tag: base_tag });
    }

    let distance = repo.commits_since(&base_tag)?;
    let short_id = if distance > 0 {
        Some(repo.current_short_id()?)
    } else {
        None
    };
    debug!(distance, short_id = ?short_id, "distance from tag");

    let dirty = repo.is_dirty()?;
    debug!(dirty, "working tree state");

    Ok(VersionInfo {
        base_tag,
        distance,
        short_id,
        dirty,
    })
}

/// Resolve the version string of `repo`.
///
/// This is the library entry point for build scripts. The result is not
/// re-validated; see [`get_verified_version`].
pub fn get_version(repo: &impl VersionControl) -> Result<String, VersionError> {
    resolve(repo).map(|info| info.to_string())
}

/// Resolve the version string of `repo` and check that it is PEP 440.
///
/// # Errors
///
/// Everything [`get_version`] returns, plus [`VersionError::InvalidVersion`]
/// when the composed string does not parse (a dirty tree sitting exactly on
/// a tag yields `<tag>.dirty`, which is not a PEP 440 version).
pub fn get_verified_version(repo: &impl VersionControl) -> Result<String, VersionError> {
    verify(get_version(repo)?)
}

/// Check that a composed version parses under PEP 440.
pub fn verify(version: String) -> Result<String, VersionError> {
    if version::is_valid(&version) {
        Ok(version)
    } else {
        Err(VersionError::InvalidVersion { version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::{FailOn, MockOperation, MockRepository};

    fn tagged(tag: &str, distance: u64) -> MockRepository {
        MockRepository::new()
            .with_tags([tag])
            .with_distance(tag, distance)
            .with_short_id("abc123d")
    }

    #[test]
    fn exactly_on_tag() {
        let repo = tagged("0.0.0", 0);
        assert_eq!(get_version(&repo).unwrap(), "0.0.0");
    }

    #[test]
    fn commits_after_tag_add_dev_segment() {
        let repo = tagged("1.0.1", 2);
        assert_eq!(get_version(&repo).unwrap(), "1.0.1.dev2+git.abc123d");
    }

    #[test]
    fn dirty_on_tag_has_no_dev_segment() {
        let repo = tagged("0.0.0", 0).dirty(true);
        assert_eq!(get_version(&repo).unwrap(), "0.0.0.dirty");
    }

    #[test]
    fn dirty_after_tag_has_both_suffixes() {
        let repo = tagged("1.2.3", 5).dirty(true);
        assert_eq!(get_version(&repo).unwrap(), "1.2.3.dev5+git.abc123d.dirty");
    }

    #[test]
    fn newest_tag_is_the_base() {
        let repo = MockRepository::new()
            .with_tags(["1.0.1", "0.1.2", "0.0.1"])
            .with_distance("1.0.1", 0)
            .with_distance("0.0.1", 7);
        assert_eq!(get_version(&repo).unwrap(), "1.0.1");
    }

    #[test]
    fn no_tags_is_an_error() {
        let repo = MockRepository::new().with_short_id("abc123d");
        assert!(matches!(get_version(&repo), Err(VersionError::NoTags)));
        assert_eq!(repo.operations(), vec![MockOperation::ListTags]);
    }

    #[test]
    fn invalid_newest_tag_fails_even_if_older_tag_is_valid() {
        let repo = MockRepository::new()
            .with_tags(["release-1", "1.0.0"])
            .with_distance("1.0.0", 0);

        match get_version(&repo) {
            Err(VersionError::InvalidBaseTag { tag }) => assert_eq!(tag, "release-1"),
            other => panic!("expected InvalidBaseTag, got {other:?}"),
        }
        assert_eq!(repo.operations(), vec![MockOperation::ListTags]);
    }

    #[test]
    fn short_id_only_queried_when_distance_is_nonzero() {
        let repo = tagged("1.0.0", 0);
        get_version(&repo).unwrap();
        assert_eq!(
            repo.operations(),
            vec![
                MockOperation::ListTags,
                MockOperation::CommitsSince("1.0.0".to_string()),
                MockOperation::IsDirty,
            ]
        );

        let repo = tagged("1.0.0", 3);
        get_version(&repo).unwrap();
        assert_eq!(
            repo.operations(),
            vec![
                MockOperation::ListTags,
                MockOperation::CommitsSince("1.0.0".to_string()),
                MockOperation::CurrentShortId,
                MockOperation::IsDirty,
            ]
        );
    }

    #[test]
    fn query_failures_propagate_unchanged() {
        for fail_on in [
            FailOn::ListTags,
            FailOn::CommitsSince,
            FailOn::CurrentShortId,
            FailOn::IsDirty,
        ] {
            let repo = tagged("1.0.0", 1).fail_on(fail_on);
            let err = get_version(&repo).unwrap_err();
            assert!(
                matches!(
                    err,
                    VersionError::Execution(GitError::CommandFailed { code: Some(128), .. })
                ),
                "{fail_on:?} produced {err:?}"
            );
        }
    }

    #[test]
    fn execution_error_message_is_the_git_error() {
        let repo = tagged("1.0.0", 0).fail_on(FailOn::ListTags);
        let err = get_version(&repo).unwrap_err();
        assert!(err.to_string().contains("injected failure"));
    }

    #[test]
    fn resolve_exposes_components() {
        let info = resolve(&tagged("2.0.0rc1", 4).dirty(true)).unwrap();
        assert_eq!(info.base_tag, "2.0.0rc1");
        assert_eq!(info.distance, 4);
        assert_eq!(info.short_id.as_ref().map(ShortId::as_str), Some("abc123d"));
        assert!(info.dirty);
        assert!(!info.is_release());
    }

    #[test]
    fn release_when_clean_on_tag() {
        let info = resolve(&tagged("3.1.4", 0)).unwrap();
        assert!(info.is_release());
        assert_eq!(info.short_id, None);
    }

    #[test]
    fn verified_version_accepts_dev_versions() {
        let repo = tagged("1.0.1", 2).dirty(true);
        assert_eq!(
            get_verified_version(&repo).unwrap(),
            "1.0.1.dev2+git.abc123d.dirty"
        );
    }

    #[test]
    fn verified_version_rejects_dirty_release() {
        let repo = tagged("0.0.0", 0).dirty(true);
        match get_verified_version(&repo) {
            Err(VersionError::InvalidVersion { version }) => assert_eq!(version, "0.0.0.dirty"),
            other => panic!("expected InvalidVersion, got {other:?}"),
        }
    }

    #[test]
    fn json_includes_rendered_version() {
        let info = resolve(&tagged("1.0.1", 2)).unwrap();
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["version"], "1.0.1.dev2+git.abc123d");
        assert_eq!(value["base_tag"], "1.0.1");
        assert_eq!(value["distance"], 2);
        assert_eq!(value["short_id"], "abc123d");
        assert_eq!(value["dirty"], false);
    }

    #[test]
    fn json_short_id_null_on_tag() {
        let info = resolve(&tagged("1.0.1", 0)).unwrap();
        let value = serde_json::to_value(&info).unwrap();
        assert!(value["short_id"].is_null());
    }
}
