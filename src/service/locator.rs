// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource locator.
//!
//! This module provides the `ResourceLocator`, which resolves resource names
//! through an ordered chain of resolvers and opens the first match.

use crate::adapters::{ContextResolver, DirectoryResolver, EmbeddedResolver, FnResolver};
use crate::domain::{LocatedResource, ResourceError, ResourceName, ResourceResult, ResourceStream};
use crate::ports::ResourceResolver;
use once_cell::sync::Lazy;
use std::io::{BufReader, Read};
use std::path::PathBuf;

static GLOBAL: Lazy<ResourceLocator> = Lazy::new(ResourceLocator::with_defaults);

/// Returns the process-wide locator built by [`ResourceLocator::with_defaults`].
///
/// # Examples
///
/// ```rust
/// use rescfg::adapters::EmbeddedResolver;
///
/// EmbeddedResolver::global().insert("/motd.txt", &b"welcome"[..]);
/// let text = rescfg::service::global().read_to_string("/motd.txt").unwrap();
/// assert_eq!(text, "welcome");
/// ```
pub fn global() -> &'static ResourceLocator {
    &GLOBAL
}

/// Resolves resource names through resolvers tried in order.
///
/// The first resolver to return a resource wins. Resolvers are never
/// reordered; the order they were added in is the order they are consulted.
/// Nothing is cached: every lookup consults the chain again.
///
/// # Examples
///
/// ```rust
/// use rescfg::adapters::EmbeddedResolver;
/// use rescfg::service::ResourceLocator;
/// use std::io::BufRead;
///
/// let assets = EmbeddedResolver::new();
/// assets.insert("queries/list.sql", b"select 1;\nselect 2;\n".to_vec());
///
/// let locator = ResourceLocator::builder()
///     .with_context()
///     .with_embedded(assets)
///     .build();
///
/// assert!(locator.locate("/queries/list.sql").is_some());
/// let lines: Vec<String> = locator
///     .open_reader("queries/list.sql")
///     .unwrap()
///     .lines()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines, vec!["select 1;", "select 2;"]);
/// assert!(locator.open_stream("missing.sql").is_err());
/// ```
pub struct ResourceLocator {
    resolvers: Vec<Box<dyn ResourceResolver>>,
}

impl ResourceLocator {
    /// Creates a locator with no resolvers; it finds nothing until some are added.
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Creates a new locator builder.
    pub fn builder() -> ResourceLocatorBuilder {
        ResourceLocatorBuilder::new()
    }

    /// Creates a locator with the standard resolution order:
    ///
    /// 1. the calling thread's resolution context ([`ContextResolver`]),
    /// 2. the process-wide embedded table ([`EmbeddedResolver::global`]),
    /// 3. the directory holding the running executable, when it can be determined.
    pub fn with_defaults() -> Self {
        Self::builder()
            .with_context()
            .with_global_embedded()
            .with_executable_dir()
            .build()
    }

    /// Appends a resolver after all existing ones.
    pub fn add_resolver(&mut self, resolver: Box<dyn ResourceResolver>) {
        self.resolvers.push(resolver);
    }

    /// Returns the names of the configured resolvers, in the order they are tried.
    pub fn resolver_names(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Finds a resource, or returns `None`.
    ///
    /// A single leading `/` is ignored, so `"/a/b"` and `"a/b"` are the same
    /// resource. Blank names return `None` without consulting any resolver.
    pub fn locate(&self, name: &str) -> Option<LocatedResource> {
        let Some(resource_name) = ResourceName::parse(name) else {
            tracing::debug!("Not locating blank resource name");
            return None;
        };
        self.locate_name(&resource_name)
    }

    /// Finds a resource by an already parsed name.
    pub fn locate_name(&self, name: &ResourceName) -> Option<LocatedResource> {
        for resolver in &self.resolvers {
            tracing::trace!("Trying resolver '{}' for '{}'", resolver.name(), name);
            if let Some(found) = resolver.resolve(name) {
                tracing::debug!(
                    "Resolver '{}' located '{}' at {}",
                    resolver.name(),
                    name.original(),
                    found
                );
                return Some(found);
            }
        }
        tracing::debug!("No resolver located '{}'", name.original());
        None
    }

    /// Opens a stream over a resource, positioned at its start.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ResourceNotFound`], carrying `name` as given,
    /// if no resolver finds the resource or opening it fails.
    pub fn open_stream(&self, name: &str) -> ResourceResult<ResourceStream> {
        let located = self
            .locate(name)
            .ok_or_else(|| ResourceError::not_found(name))?;
        located.open().map_err(|e| {
            tracing::debug!("Failed to open {}: {}", located, e);
            ResourceError::unreadable(name, e)
        })
    }

    /// Opens a buffered reader over a resource for reading UTF-8 text.
    ///
    /// Lines are read with [`std::io::BufRead`]; bytes that are not valid
    /// UTF-8 surface as an `InvalidData` error when read.
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError::ResourceNotFound`] from [`Self::open_stream`].
    pub fn open_reader(&self, name: &str) -> ResourceResult<BufReader<ResourceStream>> {
        self.open_stream(name).map(BufReader::new)
    }

    /// Reads a whole resource as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ResourceNotFound`] if the resource cannot be
    /// found or opened, or if reading or decoding it fails.
    pub fn read_to_string(&self, name: &str) -> ResourceResult<String> {
        let mut content = String::new();
        self.open_stream(name)?
            .read_to_string(&mut content)
            .map_err(|e| ResourceError::unreadable(name, e))?;
        Ok(content)
    }

    /// Reads a whole resource as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ResourceNotFound`] if the resource cannot be
    /// found, opened or read.
    pub fn read_bytes(&self, name: &str) -> ResourceResult<Vec<u8>> {
        let mut content = Vec::new();
        self.open_stream(name)?
            .read_to_end(&mut content)
            .map_err(|e| ResourceError::unreadable(name, e))?;
        Ok(content)
    }
}

impl Default for ResourceLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResourceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceLocator")
            .field("resolvers", &self.resolver_names())
            .finish()
    }
}

/// Builder for constructing a `ResourceLocator`.
///
/// Each `with_*` call appends a resolver, so the call order is the lookup
/// order.
///
/// # Examples
///
/// ```rust
/// use rescfg::service::ResourceLocatorBuilder;
///
/// let locator = ResourceLocatorBuilder::new()
///     .with_context()
///     .with_global_embedded()
///     .with_directory("/etc/myapp")
///     .build();
///
/// assert_eq!(locator.resolver_names(), vec!["context", "embedded", "directory"]);
/// ```
pub struct ResourceLocatorBuilder {
    resolvers: Vec<Box<dyn ResourceResolver>>,
}

impl ResourceLocatorBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Adds an arbitrary resolver.
    pub fn with_resolver(mut self, resolver: Box<dyn ResourceResolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Adds a closure as a resolver.
    pub fn with_fn<F>(self, label: impl Into<String>, resolve: F) -> Self
    where
        F: Fn(&ResourceName) -> Option<LocatedResource> + Send + Sync + 'static,
    {
        self.with_resolver(Box::new(FnResolver::new(label, resolve)))
    }

    /// Adds the calling thread's resolution context.
    pub fn with_context(self) -> Self {
        self.with_resolver(Box::new(ContextResolver))
    }

    /// Adds an embedded resource table.
    pub fn with_embedded(self, table: EmbeddedResolver) -> Self {
        self.with_resolver(Box::new(table))
    }

    /// Adds the process-wide embedded resource table.
    pub fn with_global_embedded(self) -> Self {
        self.with_embedded(EmbeddedResolver::global())
    }

    /// Adds a directory of resource files.
    pub fn with_directory(self, root: impl Into<PathBuf>) -> Self {
        self.with_resolver(Box::new(DirectoryResolver::new(root)))
    }

    /// Adds the directory holding the running executable.
    ///
    /// Skipped, with a debug log, when the executable path is unknown.
    pub fn with_executable_dir(self) -> Self {
        match DirectoryResolver::executable_dir() {
            Some(resolver) => self.with_resolver(Box::new(resolver)),
            None => {
                tracing::debug!("Executable directory unavailable, not adding resolver");
                self
            }
        }
    }

    /// Adds the OS-appropriate data directory of an application.
    ///
    /// Skipped, with a debug log, when no home directory can be found.
    pub fn with_project_data_dir(
        self,
        qualifier: &str,
        organization: &str,
        application: &str,
    ) -> Self {
        match DirectoryResolver::project_data_dir(qualifier, organization, application) {
            Some(resolver) => self.with_resolver(Box::new(resolver)),
            None => self,
        }
    }

    /// Builds the locator.
    pub fn build(self) -> ResourceLocator {
        ResourceLocator {
            resolvers: self.resolvers,
        }
    }
}

impl Default for ResourceLocatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
