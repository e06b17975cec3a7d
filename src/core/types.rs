//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ShortId`] - Abbreviated Git object identifier
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so output parsed at the git boundary is either
//! well-formed or rejected there.
//!
//! # Examples
//!
//! ```
//! use revisionary::core::types::ShortId;
//!
//! let id = ShortId::new("3f2a9c1").unwrap();
//! assert_eq!(id.as_str(), "3f2a9c1");
//!
//! assert!(ShortId::new("not-a-sha").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid short object id: {0}")]
    InvalidShortId(String),
}

/// An abbreviated Git object identifier, as printed by `git rev-parse --short`.
///
/// Short ids are normalized to lowercase. Git picks the abbreviation length
/// (at least 4 characters, more when needed for uniqueness), so only the
/// bounds of a full SHA-256 id are enforced.
///
/// # Example
///
/// ```
/// use revisionary::core::types::ShortId;
///
/// let id = ShortId::new("ABC123D").unwrap();
/// assert_eq!(id.as_str(), "abc123d");
/// assert_eq!(id.to_string(), "abc123d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortId(String);

impl ShortId {
    /// Shortest abbreviation git will produce.
    const MIN_LEN: usize = 4;

    /// Length of a full SHA-256 object id.
    const MAX_LEN: usize = 64;

    /// Create a new validated short id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidShortId` if the string is not 4 to 64
    /// hexadecimal characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into().to_ascii_lowercase();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    fn validate(id: &str) -> Result<(), TypeError> {
        if id.len() < Self::MIN_LEN || id.len() > Self::MAX_LEN {
            return Err(TypeError::InvalidShortId(format!(
                "expected {} to {} hex characters, got {}",
                Self::MIN_LEN,
                Self::MAX_LEN,
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidShortId(format!(
                "'{id}' is not hexadecimal"
            )));
        }
        Ok(())
    }

    /// Get the short id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ShortId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortId> for String {
    fn from(id: ShortId) -> Self {
        id.0
    }
}

impl AsRef<str> for ShortId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
