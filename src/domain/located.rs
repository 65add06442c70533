// SPDX-License-Identifier: MIT OR Apache-2.0

//! Located resource handles.
//!
//! A [`LocatedResource`] is what a resolver hands back: something that can be
//! opened into a fresh byte stream. Opening is deferred until the caller asks
//! for a stream, so locating a resource never does I/O beyond an existence
//! check.

use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An open byte stream over a resource, positioned at its start.
///
/// The caller owns the stream; it is closed when dropped.
pub type ResourceStream = Box<dyn Read + Send>;

/// A handle to a resource that a resolver found.
///
/// # Examples
///
/// ```
/// use rescfg::domain::LocatedResource;
/// use std::io::Read;
///
/// let resource = LocatedResource::embedded("greeting.txt", b"hello".to_vec());
/// let mut text = String::new();
/// resource.open().unwrap().read_to_string(&mut text).unwrap();
/// assert_eq!(text, "hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocatedResource {
    /// Bytes held in memory, shared with the table they came from.
    Embedded {
        /// Normalized resource name
        name: String,
        /// Resource content
        bytes: Arc<[u8]>,
    },
    /// A regular file on disk.
    File(PathBuf),
}

impl LocatedResource {
    /// Creates an embedded resource handle.
    pub fn embedded(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        LocatedResource::Embedded {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Creates a file resource handle.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        LocatedResource::File(path.into())
    }

    /// Opens a new stream positioned at the start of the resource.
    ///
    /// Each call yields an independent stream.
    pub fn open(&self) -> io::Result<ResourceStream> {
        match self {
            LocatedResource::Embedded { bytes, .. } => Ok(Box::new(Cursor::new(Arc::clone(bytes)))),
            LocatedResource::File(path) => Ok(Box::new(File::open(path)?)),
        }
    }

    /// Returns the file path for file resources.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LocatedResource::File(path) => Some(path),
            LocatedResource::Embedded { .. } => None,
        }
    }

    /// Returns `true` for in-memory resources.
    pub fn is_embedded(&self) -> bool {
        matches!(self, LocatedResource::Embedded { .. })
    }
}

impl fmt::Display for LocatedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocatedResource::Embedded { name, .. } => write!(f, "embedded:/{}", name),
            LocatedResource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}
