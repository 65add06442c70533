// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem directory resolver.
//!
//! Resolves names as paths below a fixed root directory. Used for resources
//! shipped next to the executable, for per-user data directories, and for
//! explicit override directories.

use crate::domain::{LocatedResource, ResourceName};
use crate::ports::ResourceResolver;
use directories::ProjectDirs;
use std::path::{Component, Path, PathBuf};

/// Resolver that looks for regular files below a root directory.
///
/// Names are confined to the root: any name with a `..`, `.`, root or prefix
/// component is refused rather than resolved.
///
/// # Examples
///
/// ```rust,no_run
/// use rescfg::adapters::DirectoryResolver;
/// use rescfg::domain::ResourceName;
/// use rescfg::ports::ResourceResolver;
///
/// let resolver = DirectoryResolver::new("/opt/myapp/share");
/// let name = ResourceName::parse("/sql/schema.sql").unwrap();
/// // Looks for /opt/myapp/share/sql/schema.sql
/// let found = resolver.resolve(&name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryResolver {
    label: String,
    root: PathBuf,
}

impl DirectoryResolver {
    /// Creates a resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            label: "directory".to_string(),
            root: root.into(),
        }
    }

    /// Creates a resolver rooted at the directory holding the running executable.
    ///
    /// Returns `None` if the executable path cannot be determined.
    pub fn executable_dir() -> Option<Self> {
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(e) => {
                tracing::debug!("Cannot determine executable path: {}", e);
                return None;
            }
        };
        let dir = exe.parent()?;
        Some(Self::new(dir).with_label("executable-dir"))
    }

    /// Creates a resolver rooted at the OS-appropriate data directory for an application.
    ///
    /// This method uses the `directories` crate, so the root is for example
    /// `~/.local/share/<application>` on Linux. Returns `None` when no home
    /// directory can be found.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use rescfg::adapters::DirectoryResolver;
    ///
    /// let resolver = DirectoryResolver::project_data_dir("com", "Example", "myapp");
    /// ```
    pub fn project_data_dir(qualifier: &str, organization: &str, application: &str) -> Option<Self> {
        let Some(dirs) = ProjectDirs::from(qualifier, organization, application) else {
            tracing::debug!(
                "Failed to determine project directories for '{}'",
                application
            );
            return None;
        };
        Some(Self::new(dirs.data_dir()).with_label("project-data-dir"))
    }

    /// Replaces the name this resolver reports in logs.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a resource name to a path under the root, or `None` if the name
    /// would escape it.
    pub fn path_for(&self, name: &ResourceName) -> Option<PathBuf> {
        let relative = Path::new(name.as_str());
        let confined = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !confined {
            tracing::debug!(
                "Refusing resource name '{}' outside of {}",
                name.original(),
                self.root.display()
            );
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ResourceResolver for DirectoryResolver {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self, name: &ResourceName) -> Option<LocatedResource> {
        let path = self.path_for(name)?;
        path.is_file().then(|| LocatedResource::file(path))
    }
}
