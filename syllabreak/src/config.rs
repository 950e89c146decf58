//! High-level configuration API

use crate::error::{ApiError, Result};
use syllabreak_core::DEFAULT_SEPARATOR;

/// Configuration for a [`crate::Syllabreak`] instance
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) separator: String,
    pub(crate) rules_toml: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            rules_toml: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The boundary marker inserted between syllables
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    separator: Option<String>,
    rules_toml: Option<String>,
}

impl ConfigBuilder {
    /// Set the boundary marker (default: U+00AD soft hyphen)
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Replace the built-in rule tables with a caller-supplied TOML
    /// document of `[[rules]]` records
    pub fn rules_toml(mut self, toml: impl Into<String>) -> Self {
        self.rules_toml = Some(toml.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let separator = self
            .separator
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        if separator.is_empty() {
            return Err(ApiError::Config("separator must not be empty".to_string()));
        }

        Ok(Config {
            separator,
            rules_toml: self.rules_toml,
        })
    }
}
