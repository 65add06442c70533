// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closure-backed resolver.

use crate::domain::{LocatedResource, ResourceName};
use crate::ports::ResourceResolver;
use std::fmt;

/// Resolver that calls a closure.
///
/// Lets a locator chain be written as a list of callbacks without a dedicated
/// type for each strategy.
///
/// # Examples
///
/// ```rust
/// use rescfg::adapters::FnResolver;
/// use rescfg::domain::{LocatedResource, ResourceName};
/// use rescfg::ports::ResourceResolver;
///
/// let version = FnResolver::new("version", |name: &ResourceName| {
///     (name.as_str() == "VERSION")
///         .then(|| LocatedResource::embedded("VERSION", b"1.0.0".to_vec()))
/// });
///
/// assert!(version.resolve(&ResourceName::parse("/VERSION").unwrap()).is_some());
/// ```
pub struct FnResolver<F> {
    label: String,
    resolve: F,
}

impl<F> FnResolver<F>
where
    F: Fn(&ResourceName) -> Option<LocatedResource> + Send + Sync,
{
    /// Creates a resolver named `label` that delegates to `resolve`.
    pub fn new(label: impl Into<String>, resolve: F) -> Self {
        Self {
            label: label.into(),
            resolve,
        }
    }
}

impl<F> ResourceResolver for FnResolver<F>
where
    F: Fn(&ResourceName) -> Option<LocatedResource> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self, name: &ResourceName) -> Option<LocatedResource> {
        (self.resolve)(name)
    }
}

impl<F> fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnResolver")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
