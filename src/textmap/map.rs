//! Text maps: upper-case keys to replacement text

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a text map
#[derive(Error, Debug)]
pub enum TextMapLoadError {
    #[error("Failed to read text map file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse text map TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Values for `${...}` placeholders, keyed by upper-case name.
///
/// Keys are upper-cased on insertion so lookups from templates (whose
/// placeholder names are upper-cased at compile time) always line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMap {
    /// Optional name for the map
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    values: HashMap<String, String>,
}

/// TOML structure for deserializing text maps
#[derive(Deserialize)]
struct TomlTextMap {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    values: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl TextMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a text map from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TextMapLoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a text map from a TOML string
    pub fn from_str(content: &str) -> Result<Self, TextMapLoadError> {
        let parsed: TomlTextMap = toml::from_str(content)?;

        let mut map: TextMap = parsed.values.into_iter().collect();
        if let Some(metadata) = parsed.metadata {
            map.name = metadata.name;
            map.description = metadata.description;
        }
        Ok(map)
    }

    /// Insert a value, upper-casing the key. Returns the replaced value.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.as_ref().to_uppercase(), value.into())
    }

    /// Look up an already upper-cased key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Merge `other` into this map; its values win on conflicts
    pub fn extend_from(&mut self, other: TextMap) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for TextMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TextMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl From<HashMap<String, String>> for TextMap {
    fn from(values: HashMap<String, String>) -> Self {
        values.into_iter().collect()
    }
}
