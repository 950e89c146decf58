//! Language rule model
//!
//! A declarative, data-driven description of each supported language:
//! character classes, digraphs, clusters, and exception tables. Rules
//! are deserialized from TOML, compiled into set-based runtime tables,
//! and collected into an immutable catalog that also performs language
//! detection.

pub mod catalog;
pub mod config;
pub mod loader;
pub mod rule;

pub use catalog::RuleCatalog;
pub use config::RuleConfig;
pub use loader::{builtin_catalog, catalog_from_toml};
pub use rule::LanguageRule;
