// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource resolver trait definition.
//!
//! This module defines the `ResourceResolver` trait, the port through which
//! the locator asks one lookup strategy (thread context, embedded table,
//! directory, closure, ...) whether it can supply a resource.

use crate::domain::{LocatedResource, ResourceName};

/// A single resource lookup strategy.
///
/// Resolvers report absence with `None`; they never fail. A resolver that
/// finds a candidate it cannot open still returns it, and the failure surfaces
/// when the caller opens the stream.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a locator can be shared between
/// threads.
///
/// # Examples
///
/// ```rust
/// use rescfg::domain::{LocatedResource, ResourceName};
/// use rescfg::ports::ResourceResolver;
///
/// struct Banner;
///
/// impl ResourceResolver for Banner {
///     fn name(&self) -> &str {
///         "banner"
///     }
///
///     fn resolve(&self, name: &ResourceName) -> Option<LocatedResource> {
///         (name.as_str() == "banner.txt")
///             .then(|| LocatedResource::embedded("banner.txt", b"hi".to_vec()))
///     }
/// }
///
/// let name = ResourceName::parse("/banner.txt").unwrap();
/// assert!(Banner.resolve(&name).is_some());
/// ```
pub trait ResourceResolver: Send + Sync {
    /// Returns a short identifier used in log output, such as `"context"` or `"embedded"`.
    fn name(&self) -> &str;

    /// Looks up a resource by its normalized name.
    fn resolve(&self, name: &ResourceName) -> Option<LocatedResource>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn resolve(&self, name: &ResourceName) -> Option<LocatedResource> {
        (**self).resolve(name)
    }
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for std::sync::Arc<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn resolve(&self, name: &ResourceName) -> Option<LocatedResource> {
        (**self).resolve(name)
    }
}
