// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing resolver and configuration view implementations.
//!
//! Resolvers implement `ResourceResolver` for one lookup strategy each.
//! Configuration views implement `ReadConfig` over a specific backing store.

pub mod context;
pub mod directory;
pub mod embedded;
pub mod function;
pub mod map_config;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "env")]
pub mod env_var;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use context::{ContextGuard, ContextResolver};
pub use directory::DirectoryResolver;
pub use embedded::EmbeddedResolver;
pub use function::FnResolver;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::ArgsConfig;
#[cfg(feature = "env")]
pub use env_var::EnvConfig;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlConfig;
