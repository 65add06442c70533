// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered resource resolution and lenient read-only configuration views.
//!
//! This crate provides two independent utilities:
//!
//! - A **resource locator** that turns a logical resource name such as
//!   `/sql/schema.sql` into an open byte stream, trying an ordered list of
//!   lookup strategies: a per-thread override, a table of embedded assets,
//!   and directories on disk.
//! - A **configuration view** trait, [`ReadConfig`](ports::ReadConfig), that
//!   reads typed values with default fallback out of a key-value mapping it
//!   does not own: plain maps, environment variables, YAML documents, or
//!   `-D key=value` command-line definitions.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ResourceName`, `LocatedResource`, errors)
//! - **Ports**: Trait definitions (`ResourceResolver`, `ReadConfig`)
//! - **Adapters**: Resolver strategies and configuration backends
//! - **Service**: The `ResourceLocator` that chains resolvers together
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML configuration views (default)
//! - `env`: Enable environment variable views (default)
//! - `cli`: Enable command-line definition views (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use rescfg::prelude::*;
//! use std::collections::HashMap;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! // Resources
//! EmbeddedResolver::global().insert("/banner.txt", &b"hello"[..]);
//! let banner = rescfg::service::global().read_to_string("banner.txt")?;
//! assert_eq!(banner, "hello");
//!
//! // Configuration
//! let mut properties = HashMap::new();
//! properties.insert("feature.enabled".to_string(), " True ".to_string());
//! assert!(properties.get_boolean_value("feature.enabled"));
//! assert_eq!(properties.get_string_value_or("feature.name", "none"), "none");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{ContextResolver, DirectoryResolver, EmbeddedResolver, FnResolver};
    pub use crate::domain::{
        ConfigError, LocatedResource, ResourceError, ResourceName, ResourceResult, ResourceStream,
        Result,
    };
    pub use crate::ports::{ReadConfig, ResourceResolver};
    pub use crate::service::{ResourceLocator, ResourceLocatorBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "cli")]
    pub use crate::adapters::ArgsConfig;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvConfig;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlConfig;
}
