// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource name newtype with normalization.
//!
//! All resource names are treated as absolute. A single leading `/` is
//! stripped, so `"/a/b"` and `"a/b"` name the same resource. The text the
//! caller supplied is kept for diagnostics.

use crate::domain::errors::ResourceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A normalized, non-blank resource name.
///
/// Equality and hashing use the normalized form only.
///
/// # Examples
///
/// ```
/// use rescfg::domain::ResourceName;
///
/// let absolute = ResourceName::parse("/sql/schema.sql").unwrap();
/// let relative = ResourceName::parse("sql/schema.sql").unwrap();
///
/// assert_eq!(absolute, relative);
/// assert_eq!(absolute.as_str(), "sql/schema.sql");
/// assert_eq!(absolute.original(), "/sql/schema.sql");
/// assert!(ResourceName::parse("   ").is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName {
    original: String,
    normalized: String,
}

impl ResourceName {
    /// Parses a resource name, returning `None` for blank input.
    ///
    /// Input is blank when it is empty or whitespace only, before or after the
    /// leading `/` is stripped.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.strip_prefix('/').unwrap_or(raw);
        if normalized.trim().is_empty() {
            return None;
        }
        Some(ResourceName {
            original: raw.to_string(),
            normalized: normalized.to_string(),
        })
    }

    /// Returns the normalized name, without a leading `/`.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the name exactly as it was supplied.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the normalized name with a single leading `/`.
    pub fn absolute(&self) -> String {
        format!("/{}", self.normalized)
    }

    /// Iterates over the `/`-separated segments of the normalized name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.normalized.split('/')
    }
}

impl TryFrom<String> for ResourceName {
    type Error = ResourceError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        ResourceName::parse(&raw).ok_or(ResourceError::BlankName)
    }
}

impl TryFrom<&str> for ResourceName {
    type Error = ResourceError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        ResourceName::parse(raw).ok_or(ResourceError::BlankName)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.original
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl PartialEq for ResourceName {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for ResourceName {}

impl Hash for ResourceName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}
