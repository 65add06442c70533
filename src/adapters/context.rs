// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-thread resolution context.
//!
//! Code running on a thread can install its own resolver for the duration of a
//! scope, overriding where resources are found for everything that thread
//! looks up. Contexts nest: the innermost installed resolver is the one
//! consulted, and leaving a scope restores the previous one.

use crate::domain::{LocatedResource, ResourceName};
use crate::ports::ResourceResolver;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::sync::Arc;

thread_local! {
    static CONTEXT: RefCell<Vec<(u64, Arc<dyn ResourceResolver>)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ENTRY: Cell<u64> = const { Cell::new(0) };
}

/// Resolver that delegates to the calling thread's current context.
///
/// With no context installed it resolves nothing. It holds no state itself, so
/// one instance serves every thread.
///
/// # Examples
///
/// ```rust
/// use rescfg::adapters::{ContextResolver, EmbeddedResolver};
/// use rescfg::domain::ResourceName;
/// use rescfg::ports::ResourceResolver;
/// use std::sync::Arc;
///
/// let overrides = EmbeddedResolver::new();
/// overrides.insert("/app.properties", b"mode=test".to_vec());
///
/// let name = ResourceName::parse("app.properties").unwrap();
/// assert!(ContextResolver.resolve(&name).is_none());
///
/// ContextResolver::scope(Arc::new(overrides), || {
///     assert!(ContextResolver.resolve(&name).is_some());
/// });
///
/// assert!(ContextResolver.resolve(&name).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextResolver;

impl ContextResolver {
    /// Installs `resolver` as this thread's context until the guard is dropped.
    pub fn enter(resolver: Arc<dyn ResourceResolver>) -> ContextGuard {
        tracing::trace!("Entering resolution context '{}'", resolver.name());
        let entry = NEXT_ENTRY.with(|next| {
            let entry = next.get();
            next.set(entry.wrapping_add(1));
            entry
        });
        CONTEXT.with(|stack| stack.borrow_mut().push((entry, resolver)));
        ContextGuard {
            entry,
            _not_send: PhantomData,
        }
    }

    /// Runs `f` with `resolver` installed as this thread's context.
    pub fn scope<T>(resolver: Arc<dyn ResourceResolver>, f: impl FnOnce() -> T) -> T {
        let _guard = Self::enter(resolver);
        f()
    }

    /// Returns the resolver currently installed on this thread, if any.
    pub fn current() -> Option<Arc<dyn ResourceResolver>> {
        CONTEXT.with(|stack| stack.borrow().last().map(|(_, resolver)| resolver.clone()))
    }
}

impl ResourceResolver for ContextResolver {
    fn name(&self) -> &str {
        "context"
    }

    fn resolve(&self, name: &ResourceName) -> Option<LocatedResource> {
        // Clone out of the cell so a context resolver may itself consult the context
        let current = Self::current()?;
        current.resolve(name)
    }
}

/// Removes its resolution context when dropped.
///
/// Only the context this guard installed is removed, so guards may be dropped
/// in any order. The guard is tied to the thread that created it and cannot be sent
/// elsewhere.
#[must_use = "the context is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ContextGuard {
    entry: u64,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CONTEXT.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(position) = stack.iter().rposition(|(entry, _)| *entry == self.entry) {
                let (_, resolver) = stack.remove(position);
                tracing::trace!("Leaving resolution context '{}'", resolver.name());
            }
        });
    }
}
