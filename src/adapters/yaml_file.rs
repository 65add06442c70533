// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML-backed configuration view.
//!
//! YAML documents are flattened into dot-notation keys (`database.host`,
//! `servers.0`) so they can be read through `ReadConfig` like any other
//! key-value mapping.

use crate::domain::{ConfigError, Result};
use crate::ports::ReadConfig;
use directories::ProjectDirs;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Maximum accepted size for YAML content (10MB)
const MAX_YAML_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "yaml-file";

/// Configuration view over a flattened YAML document.
///
/// Scalars become strings (`null` becomes the empty string); mappings nest
/// with `.`; sequence items are addressed by index.
///
/// # Examples
///
/// ```rust
/// use rescfg::adapters::YamlConfig;
/// use rescfg::ports::ReadConfig;
///
/// let config = YamlConfig::from_yaml_str("database:\n  host: localhost\n  ssl: True\n").unwrap();
/// assert_eq!(config.get_string_value("database.host"), "localhost");
/// assert!(config.get_boolean_value("database.ssl"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlConfig {
    values: HashMap<String, String>,
    file_path: Option<PathBuf>,
}

impl YamlConfig {
    /// Parses YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut values = HashMap::new();
        // A scalar or empty document has no keys to address it by
        if document.is_mapping() || document.is_sequence() {
            flatten(&document, String::new(), &mut values);
        }
        tracing::debug!("Loaded {} YAML configuration values", values.len());
        Ok(Self {
            values,
            file_path: None,
        })
    }

    /// Reads and parses YAML from any reader, such as a resource stream.
    ///
    /// Content larger than 10MB is rejected.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.take(MAX_YAML_SIZE + 1).read_to_end(&mut bytes)?;
        if bytes.len() as u64 > MAX_YAML_SIZE {
            return Err(too_large(bytes.len() as u64));
        }
        let content = String::from_utf8(bytes).map_err(|e| ConfigError::ParseError {
            message: "YAML content is not valid UTF-8".to_string(),
            source: Some(Box::new(e)),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Reads and parses a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Failed to open configuration file: {}", display_name(path)),
            source: Some(Box::new(e)),
        })?;

        let size = file.metadata()?.len();
        if size > MAX_YAML_SIZE {
            return Err(too_large(size));
        }

        let mut config = Self::from_reader(file)?;
        config.file_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Reads `filename` from the OS-appropriate configuration directory of an application.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use rescfg::adapters::YamlConfig;
    ///
    /// let config = YamlConfig::from_project_config("com", "Example", "myapp", "config.yaml").unwrap();
    /// ```
    pub fn from_project_config(
        qualifier: &str,
        organization: &str,
        application: &str,
        filename: &str,
    ) -> Result<Self> {
        let dirs = ProjectDirs::from(qualifier, organization, application).ok_or_else(|| {
            ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            }
        })?;
        Self::from_file(dirs.config_dir().join(filename))
    }

    /// Returns the file the values were read from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Iterates over every flattened key.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the number of flattened values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the document held no scalar values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ReadConfig for YamlConfig {
    fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn raw_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.values.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

fn flatten(value: &serde_yaml::Value, prefix: String, out: &mut HashMap<String, String>) {
    let child = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", prefix, segment)
        }
    };

    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, nested) in map {
                let segment = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    _ => continue,
                };
                flatten(nested, child(&segment), out);
            }
        }
        serde_yaml::Value::Sequence(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten(nested, child(&index.to_string()), out);
            }
        }
        serde_yaml::Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        serde_yaml::Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        serde_yaml::Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        serde_yaml::Value::Null => {
            out.insert(prefix, String::new());
        }
        serde_yaml::Value::Tagged(tagged) => flatten(&tagged.value, prefix, out),
    }
}

fn too_large(size: u64) -> ConfigError {
    ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!(
            "Configuration too large: {} bytes (max {} bytes)",
            size, MAX_YAML_SIZE
        ),
        source: None,
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}
