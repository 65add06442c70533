// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded resource table resolver.
//!
//! Resources compiled into the binary (typically with `include_bytes!`) or
//! registered at startup live in an in-memory table keyed by normalized name.
//! The process-wide table returned by [`EmbeddedResolver::global`] plays the
//! role of the resources owned by the crate that defines the locator.

use crate::domain::{LocatedResource, ResourceName};
use crate::ports::ResourceResolver;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type AssetTable = HashMap<String, Arc<[u8]>>;

static GLOBAL_ASSETS: Lazy<Arc<RwLock<AssetTable>>> =
    Lazy::new(|| Arc::new(RwLock::new(HashMap::new())));

/// Resolver over a shared table of in-memory resources.
///
/// Cloning the resolver shares the table, so assets inserted through one handle
/// are visible through every clone.
///
/// # Examples
///
/// ```rust
/// use rescfg::adapters::EmbeddedResolver;
/// use rescfg::domain::ResourceName;
/// use rescfg::ports::ResourceResolver;
///
/// let assets = EmbeddedResolver::new();
/// assets.insert("/templates/index.html", &b"<html></html>"[..]);
///
/// let name = ResourceName::parse("templates/index.html").unwrap();
/// assert!(assets.resolve(&name).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResolver {
    assets: Arc<RwLock<AssetTable>>,
}

impl EmbeddedResolver {
    /// Creates a resolver with its own empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the process-wide table.
    pub fn global() -> Self {
        Self {
            assets: Arc::clone(&GLOBAL_ASSETS),
        }
    }

    /// Creates a resolver pre-populated with `assets`.
    ///
    /// Entries with blank names are skipped.
    pub fn with_assets<N, B>(assets: impl IntoIterator<Item = (N, B)>) -> Self
    where
        N: AsRef<str>,
        B: Into<Arc<[u8]>>,
    {
        let resolver = Self::new();
        for (name, bytes) in assets {
            resolver.insert(name.as_ref(), bytes);
        }
        resolver
    }

    /// Adds or replaces a resource.
    ///
    /// Returns `false`, leaving the table untouched, if the name is blank.
    pub fn insert(&self, name: &str, bytes: impl Into<Arc<[u8]>>) -> bool {
        let Some(name) = ResourceName::parse(name) else {
            tracing::debug!("Ignoring embedded resource with blank name");
            return false;
        };
        self.write().insert(name.as_str().to_string(), bytes.into());
        true
    }

    /// Removes a resource, returning `true` if it was present.
    pub fn remove(&self, name: &str) -> bool {
        match ResourceName::parse(name) {
            Some(name) => self.write().remove(name.as_str()).is_some(),
            None => false,
        }
    }

    /// Returns `true` if the table holds a resource with this name.
    pub fn contains(&self, name: &str) -> bool {
        match ResourceName::parse(name) {
            Some(name) => self.read().contains_key(name.as_str()),
            None => false,
        }
    }

    /// Returns the number of resources in the table.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the table holds no resources.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoning is ignored: entries are independent of each other.
    fn read(&self) -> RwLockReadGuard<'_, AssetTable> {
        self.assets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AssetTable> {
        self.assets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResourceResolver for EmbeddedResolver {
    fn name(&self) -> &str {
        "embedded"
    }

    fn resolve(&self, name: &ResourceName) -> Option<LocatedResource> {
        self.read()
            .get(name.as_str())
            .map(|bytes| LocatedResource::embedded(name.as_str(), Arc::clone(bytes)))
    }
}
