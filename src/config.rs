//! Configuration for the render pipeline

use serde::Deserialize;

use crate::template::ErrorPolicy;

/// Which rendering path to take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Compile to parts, then render
    #[default]
    Compiled,
    /// Scan and substitute in one pass
    OnePass,
}

/// Configuration options for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// What to do with placeholders that cannot be resolved
    pub policy: ErrorPolicy,

    /// Rendering path
    pub mode: RenderMode,
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Set the error policy
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the rendering path
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}
