// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the crate.
//!
//! Resource lookups fail with [`ResourceError`]; building an owning
//! configuration view (YAML text, command-line definitions) fails with
//! [`ConfigError`]. Reading values out of a configuration view never fails.
//! All errors use `thiserror` for proper error handling and conversion.

use std::io;
use thiserror::Error;

/// Errors raised while resolving or opening a resource.
///
/// # Examples
///
/// ```
/// use rescfg::domain::errors::ResourceError;
///
/// let error = ResourceError::not_found("/templates/report.html");
/// assert_eq!(
///     error.to_string(),
///     "Cannot read resource </templates/report.html>"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResourceError {
    /// No resolver produced the resource, or the located resource could not be opened.
    #[error("Cannot read resource <{name}>")]
    ResourceNotFound {
        /// The name exactly as the caller supplied it
        name: String,
        /// The I/O error raised while opening or reading, if any
        #[source]
        source: Option<io::Error>,
    },

    /// A blank string was converted into a resource name.
    #[error("Resource name must not be blank")]
    BlankName,
}

impl ResourceError {
    /// Creates a `ResourceNotFound` error with no underlying cause.
    pub fn not_found(name: impl Into<String>) -> Self {
        ResourceError::ResourceNotFound {
            name: name.into(),
            source: None,
        }
    }

    /// Creates a `ResourceNotFound` error caused by an I/O failure.
    pub fn unreadable(name: impl Into<String>, err: io::Error) -> Self {
        ResourceError::ResourceNotFound {
            name: name.into(),
            source: Some(err),
        }
    }

    /// Returns the caller-supplied name for `ResourceNotFound`, `None` otherwise.
    pub fn resource_name(&self) -> Option<&str> {
        match self {
            ResourceError::ResourceNotFound { name, .. } => Some(name),
            ResourceError::BlankName => None,
        }
    }
}

/// Errors raised while building a configuration view.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse configuration content.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// A specialized Result type for building configuration views.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A specialized Result type for resource operations.
pub type ResourceResult<T> = std::result::Result<T, ResourceError>;
