// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line property definitions.
//!
//! This module provides a `ReadConfig` implementation over `-D key=value`
//! definitions given on the command line, in the style of JVM system
//! properties.

use crate::domain::{ConfigError, Result};
use crate::ports::ReadConfig;
use clap::{Arg, ArgAction, Command};
use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::OsString;

const DEFINE: &str = "define";

/// Configuration view over `-D key=value` / `--define key=value` arguments.
///
/// Later definitions of the same key replace earlier ones. Any other argument
/// is rejected.
///
/// # Examples
///
/// ```rust
/// use rescfg::adapters::ArgsConfig;
/// use rescfg::ports::ReadConfig;
///
/// let config = ArgsConfig::from_args(["-D", "db.host=localhost", "--define", "verbose=true"]).unwrap();
/// assert_eq!(config.get_string_value("db.host"), "localhost");
/// assert!(config.get_boolean_value("verbose"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgsConfig {
    values: HashMap<String, String>,
}

impl ArgsConfig {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses definitions from `args`, which must not include the program name.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command()
            .try_get_matches_from(args)
            .map_err(|e| ConfigError::ParseError {
                message: "Invalid command-line definitions".to_string(),
                source: Some(Box::new(e)),
            })?;

        let values: HashMap<String, String> = matches
            .get_many::<(String, String)>(DEFINE)
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        tracing::debug!("Parsed {} command-line definitions", values.len());
        Ok(Self { values })
    }

    /// Parses definitions from the process's command-line arguments.
    ///
    /// This skips the first argument (the program name).
    pub fn from_env_args() -> Result<Self> {
        Self::from_args(std::env::args_os().skip(1))
    }

    /// Iterates over every defined key.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl ReadConfig for ArgsConfig {
    fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn raw_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.values.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

fn command() -> Command {
    Command::new("rescfg")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(DEFINE)
                .short('D')
                .long(DEFINE)
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .value_parser(parse_definition),
        )
}

fn parse_definition(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
