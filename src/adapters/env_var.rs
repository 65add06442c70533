// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration view.
//!
//! This module provides a `ReadConfig` implementation that reads values
//! straight from the process environment.

use crate::ports::ReadConfig;
use std::borrow::Cow;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Read-only view over the process environment.
///
/// Every access reads the environment afresh; nothing is cached or copied, so
/// variables set after the view was created are visible. An optional prefix is
/// prepended to every key, letting an application expose `APP_DB_HOST` as
/// `DB_HOST`.
///
/// Variables whose value is not valid Unicode are read lossily.
///
/// # Examples
///
/// ```rust
/// use rescfg::adapters::EnvConfig;
/// use rescfg::ports::ReadConfig;
///
/// // All environment variables
/// let env = EnvConfig::new();
///
/// // Only variables starting with "MYAPP_"
/// let env = EnvConfig::with_prefix("MYAPP_");
/// let debug = env.get_boolean_value("DEBUG"); // reads MYAPP_DEBUG
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Prefix prepended to every key
    prefix: Option<String>,
}

impl EnvConfig {
    /// Creates a view over every environment variable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a view that prepends `prefix` to each key before lookup.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Returns the configured prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn variable_name<'k>(&self, key: &'k str) -> Option<Cow<'k, str>> {
        let name = match &self.prefix {
            Some(prefix) => Cow::Owned(format!("{}{}", prefix, key)),
            None => Cow::Borrowed(key),
        };
        // Such names can never be set, so they are reported as absent
        if name.is_empty() || name.len() > MAX_ENV_KEY_LEN || name.contains(&['=', '\0'][..]) {
            tracing::debug!("Skipping invalid environment variable name: '{}'", name);
            return None;
        }
        Some(name)
    }
}

impl ReadConfig for EnvConfig {
    fn contains_key(&self, key: &str) -> bool {
        self.variable_name(key)
            .is_some_and(|name| env::var_os(name.as_ref()).is_some())
    }

    fn raw_value(&self, key: &str) -> Option<Cow<'_, str>> {
        let name = self.variable_name(key)?;
        let value = env::var_os(name.as_ref())?;
        Some(Cow::Owned(value.to_string_lossy().into_owned()))
    }
}
