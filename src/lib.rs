//! Revisionary - PEP 440 version strings from git history
//!
//! Revisionary derives a deterministic, sortable version for a git working
//! tree from its newest version tag, the number of commits since that tag,
//! and whether the tree has uncommitted changes:
//!
//! ```text
//! <base-tag>[.dev<N>+git.<short-id>][.dirty]
//! ```
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, prints the result)
//! - [`core`] - Version resolution, PEP 440 validation and domain types
//! - [`git`] - Single interface for all Git queries
//! - [`ui`] - User-facing output
//!
//! # Correctness Invariants
//!
//! 1. The repository is never mutated
//! 2. The base tag is always a valid PEP 440 version
//! 3. Every query observes live repository state; nothing is cached
//!
//! # Example
//!
//! ```no_run
//! use revisionary::core::resolve::get_version;
//! use revisionary::git::Repository;
//!
//! let version = get_version(&Repository::open("."))?;
//! println!("{version}");
//! # Ok::<(), revisionary::core::resolve::VersionError>(())
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
