//! core
//!
//! Core domain types and version logic for revisionary.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ShortId
//! - [`version`] - PEP 440 validation
//! - [`resolve`] - Version resolution from repository state
//!
//! # Design Principles
//!
//! - Strong typing at the git boundary; no stringly-typed command output
//! - Resolution is a pure function of the [`crate::git::VersionControl`] answers

pub mod resolve;
pub mod types;
pub mod version;
