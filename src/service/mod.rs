// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resource locator.
//!
//! The locator orchestrates the resolvers from the adapters layer, trying
//! them in order until one finds the requested resource.

pub mod locator;

// Re-export commonly used types
pub use locator::{global, ResourceLocator, ResourceLocatorBuilder};
