//! core::version
//!
//! PEP 440 version grammar validation.
//!
//! The grammar itself (release segment, pre/post/dev segments, local labels,
//! normalization rules) is delegated to `pep440_rs`. This module only adapts
//! it to the two questions the resolver asks: does a string parse, and what
//! does it parse to.

use std::str::FromStr;

use pep440_rs::Version;

/// Check whether `candidate` is a valid PEP 440 version.
///
/// Total: never fails, returns `false` for any non-conforming input,
/// including the empty string.
///
/// # Example
///
/// ```
/// use revisionary::core::version::is_valid;
///
/// assert!(is_valid("1.0.1"));
/// assert!(is_valid("1.0.1.dev2+git.abc123d"));
/// assert!(!is_valid("release-1"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(candidate: &str) -> bool {
    parse(candidate).is_some()
}

/// Parse `candidate` as a PEP 440 version, if it is one.
pub fn parse(candidate: &str) -> Option<Version> {
    Version::from_str(candidate).ok()
}
