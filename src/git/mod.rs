//! git
//!
//! Single interface for all Git queries.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. It is the only place that
//! spawns the `git` executable; everything else talks to the
//! [`VersionControl`] trait.
//!
//! # Responsibilities
//!
//! - Listing tags merged into HEAD, newest version first
//! - Detecting a dirty working tree
//! - Counting commits since a revision
//! - Resolving the abbreviated HEAD id
//!
//! # Invariants
//!
//! - The repository is never mutated
//! - Each query spawns exactly one process; nothing is cached
//! - All queries return strong types; unparseable output is an error
//!
//! # Example
//!
//! ```no_run
//! use revisionary::git::{Repository, VersionControl};
//!
//! let repo = Repository::open(".");
//! let dirty = repo.is_dirty()?;
//! let head = repo.current_short_id()?;
//! println!("{head} dirty={dirty}");
//! # Ok::<(), revisionary::git::GitError>(())
//! ```

mod interface;
pub mod mock;
mod traits;

pub use interface::{GitError, Repository};
pub use traits::VersionControl;
