// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

#![allow(dead_code)]

use rescfg::domain::{LocatedResource, ResourceName};
use rescfg::ports::ResourceResolver;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// A mock resolver serving fixed in-memory resources.
///
/// Counts how many times it was consulted so tests can assert which
/// strategies were tried.
#[derive(Debug, Clone)]
pub struct MockResolver {
    name: String,
    resources: HashMap<String, Vec<u8>>,
    calls: Arc<AtomicUsize>,
}

impl MockResolver {
    /// Creates an empty mock resolver.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds a resource under its normalized name.
    pub fn with_resource(mut self, name: &str, content: &str) -> Self {
        let name = ResourceName::parse(name).expect("mock resource names are not blank");
        self.resources
            .insert(name.as_str().to_string(), content.as_bytes().to_vec());
        self
    }

    /// Returns a handle to the call counter, usable after the resolver is boxed.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Returns how often `resolve` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ResourceResolver for MockResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, name: &ResourceName) -> Option<LocatedResource> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.resources
            .get(name.as_str())
            .map(|bytes| LocatedResource::embedded(name.as_str(), bytes.clone()))
    }
}

/// Creates a temporary directory populated with `files` (relative path, content).
///
/// The directory is deleted when the returned `TempDir` is dropped.
pub fn create_temp_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (relative, content) in files {
        write_file(dir.path(), relative, content);
    }
    dir
}

/// Writes a file below `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Installs a test-friendly tracing subscriber, ignoring repeated calls.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
