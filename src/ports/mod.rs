// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the two seams of the crate: how a lookup strategy
//! supplies resources, and how a key-value mapping is read. Adapters implement
//! them; the service layer consumes them.

pub mod read_config;
pub mod resolver;

// Re-export commonly used types
pub use read_config::ReadConfig;
pub use resolver::ResourceResolver;
