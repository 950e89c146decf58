//! Public API for rule-driven syllabification
//!
//! This crate provides a stable interface over the syllabification
//! engine: pick a language explicitly or let the catalog detect one,
//! then insert soft hyphens (or any separator) at syllable boundaries.
//!
//! # Example
//!
//! ```rust
//! use syllabreak::Syllabreak;
//!
//! let s = Syllabreak::with_separator("-");
//! assert_eq!(s.syllabify("banana", Some("en")), "ba-na-na");
//! assert!(!s.detect_language("straße").is_empty());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;

use syllabreak_core::language::{builtin_catalog, catalog_from_toml, RuleCatalog};
use syllabreak_core::syllable::syllabify_text;

pub use config::{Config, ConfigBuilder};
pub use error::{ApiError, Result};
pub use syllabreak_core::DEFAULT_SEPARATOR;

/// Main entry point for syllabification and language detection.
///
/// Immutable after construction; safe to share across threads without
/// locking. All soft failures (unknown language code, empty input, no
/// detectable language) return the input unchanged or an empty list
/// rather than erroring.
pub struct Syllabreak {
    catalog: RuleCatalog,
    separator: String,
}

impl Syllabreak {
    /// Create an instance with the built-in rule tables and the
    /// default soft-hyphen separator
    pub fn new() -> Self {
        Self {
            catalog: builtin_catalog().clone(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Create an instance with the built-in rule tables and a custom
    /// separator
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            catalog: builtin_catalog().clone(),
            separator: separator.into(),
        }
    }

    /// Create an instance from a full configuration.
    ///
    /// A caller-supplied rule table replaces the built-in catalog
    /// entirely; malformed tables are an explicit error, never a
    /// silent fallback.
    pub fn with_config(config: Config) -> Result<Self> {
        let catalog = match &config.rules_toml {
            Some(toml) => catalog_from_toml(toml)?,
            None => builtin_catalog().clone(),
        };
        Ok(Self {
            catalog,
            separator: config.separator,
        })
    }

    /// Insert the separator at syllable boundaries of every word in
    /// `text`.
    ///
    /// With `lang` given, that rule is used; an unknown code returns
    /// the input unchanged. Without it the language is auto-detected
    /// from the whole text; when detection finds nothing the input is
    /// returned unchanged. Non-letter characters, including separators
    /// inserted by a previous pass, are never re-processed.
    pub fn syllabify(&self, text: &str, lang: Option<&str>) -> String {
        if text.is_empty() {
            return String::new();
        }

        let rule = match lang {
            Some(code) => self.catalog.rule_for(code),
            None => self
                .catalog
                .detect(text)
                .into_iter()
                .next(),
        };

        match rule {
            Some(rule) => syllabify_text(text, rule, &self.separator),
            None => text.to_string(),
        }
    }

    /// Rank the catalog's languages against `text`, best match first.
    ///
    /// Empty when the text has no letters or matches no rule.
    pub fn detect_language(&self, text: &str) -> Vec<String> {
        self.catalog.detect_codes(text)
    }

    /// Language codes available in this instance's catalog
    pub fn languages(&self) -> Vec<&str> {
        self.catalog.rules().iter().map(|r| r.code()).collect()
    }

    /// The configured boundary marker
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for Syllabreak {
    fn default() -> Self {
        Self::new()
    }
}
