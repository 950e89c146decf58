//! Core error types
//!
//! Only rule-table loading can fail; syllabification itself is total
//! and degrades to returning its input unchanged.

use thiserror::Error;

/// Errors raised while building a rule catalog
#[derive(Error, Debug)]
pub enum Error {
    /// A rule table failed to deserialize
    #[error("failed to parse rule table '{lang}': {source}")]
    RuleParse {
        /// Language the table was registered under
        lang: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A rule table failed semantic validation
    #[error("invalid rule table '{lang}': {reason}")]
    RuleInvalid {
        /// Language the table was registered under
        lang: String,
        /// What the validator rejected
        reason: String,
    },

    /// An embedded table's `lang` field disagrees with its registration
    #[error("rule table code mismatch: expected '{expected}', found '{found}'")]
    RuleMismatch {
        /// Code the table was registered under
        expected: String,
        /// Code found in the table itself
        found: String,
    },

    /// Two tables declare the same language code
    #[error("duplicate language code '{0}'")]
    DuplicateLanguage(String),
}

/// Result type for catalog construction
pub type Result<T> = std::result::Result<T, Error>;
