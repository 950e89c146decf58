//! Rule-driven syllabification engine
//!
//! Splits words of a given (or auto-detected) natural language into
//! syllables, marking boundaries with an insertable separator. Each
//! supported language is described by a declarative rule table
//! (vowel/consonant inventories, digraphs, clusters, exceptions); the
//! engine applies one phonological algorithm parameterized by that
//! rule.
//!
//! # Architecture
//!
//! - **Language layer**: rule schema, runtime rule tables, and the
//!   catalog that derives unique character sets and ranks rules for
//!   language detection.
//! - **Syllable layer**: the per-word pipeline (tokenizer, nucleus
//!   finder, boundary placer, word rebuilder) and the text scanner
//!   that applies it to running text.
//!
//! Every type is immutable after construction; concurrent read-only
//! use needs no locking.
//!
//! # Example
//!
//! ```rust
//! use syllabreak_core::language::builtin_catalog;
//! use syllabreak_core::syllable::syllabify_text;
//!
//! let catalog = builtin_catalog();
//! let rule = catalog.rule_for("en").unwrap();
//! assert_eq!(syllabify_text("banana", rule, "-"), "ba-na-na");
//! ```

pub mod error;
pub mod language;
pub mod syllable;

pub use error::{Error, Result};
pub use language::{builtin_catalog, catalog_from_toml, LanguageRule, RuleCatalog, RuleConfig};
pub use syllable::{syllabify_text, Token, TokenClass, WordSyllabifier};

/// Default boundary marker: U+00AD soft hyphen
pub const DEFAULT_SEPARATOR: &str = "\u{00AD}";
