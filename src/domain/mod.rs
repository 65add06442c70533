// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module defines resource names, located resource handles and the error
//! types used throughout the crate. It is independent of any resolution
//! strategy or configuration backend.

pub mod errors;
pub mod located;
pub mod resource_name;

// Re-export commonly used types
pub use errors::{ConfigError, ResourceError, ResourceResult, Result};
pub use located::{LocatedResource, ResourceStream};
pub use resource_name::ResourceName;
