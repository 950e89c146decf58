//! Rule table loader
//!
//! Embeds the bundled language tables at compile time and builds the
//! shared built-in catalog once, on first use.

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::language::{catalog::RuleCatalog, config::RuleConfig, rule::LanguageRule};

static BUILTIN: OnceLock<RuleCatalog> = OnceLock::new();

/// Bundled rule tables, one TOML file per language
const EMBEDDED_TABLES: &[(&str, &str)] = &[
    ("en", include_str!("../../configs/languages/english.toml")),
    ("de", include_str!("../../configs/languages/german.toml")),
    ("nl", include_str!("../../configs/languages/dutch.toml")),
    ("ro", include_str!("../../configs/languages/romanian.toml")),
    ("ru", include_str!("../../configs/languages/russian.toml")),
    ("uk", include_str!("../../configs/languages/ukrainian.toml")),
    (
        "sr-latn",
        include_str!("../../configs/languages/serbian-latin.toml"),
    ),
    ("tr", include_str!("../../configs/languages/turkish.toml")),
];

/// The built-in catalog of bundled languages.
///
/// Built once behind a `OnceLock`; the embedded tables are part of the
/// binary, so a failure here is a packaging defect, not an input error.
pub fn builtin_catalog() -> &'static RuleCatalog {
    BUILTIN.get_or_init(|| load_embedded().expect("embedded rule tables must parse"))
}

fn load_embedded() -> Result<RuleCatalog> {
    let mut rules = Vec::with_capacity(EMBEDDED_TABLES.len());

    for (code, toml_content) in EMBEDDED_TABLES {
        let config: RuleConfig = toml::from_str(toml_content).map_err(|e| Error::RuleParse {
            lang: (*code).to_string(),
            source: e,
        })?;

        if config.lang != *code {
            return Err(Error::RuleMismatch {
                expected: (*code).to_string(),
                found: config.lang,
            });
        }

        rules.push(build_rule(&config)?);
    }

    debug!(languages = rules.len(), "loaded embedded rule tables");
    Ok(RuleCatalog::new(rules))
}

/// External multi-language rule table document
#[derive(Debug, Deserialize)]
struct RuleTableDoc {
    #[serde(default)]
    rules: Vec<RuleConfig>,
}

/// Build a catalog from a caller-supplied TOML document.
///
/// The document holds an array of `[[rules]]` records following the
/// same schema as the bundled tables. Malformed input is an explicit
/// error; the loader never falls back to the built-in tables.
pub fn catalog_from_toml(toml_str: &str) -> Result<RuleCatalog> {
    let doc: RuleTableDoc = toml::from_str(toml_str).map_err(|e| Error::RuleParse {
        lang: "<external>".to_string(),
        source: e,
    })?;

    let mut rules = Vec::with_capacity(doc.rules.len());
    for config in &doc.rules {
        if rules
            .iter()
            .any(|r: &LanguageRule| r.code() == config.lang)
        {
            return Err(Error::DuplicateLanguage(config.lang.clone()));
        }
        rules.push(build_rule(config)?);
    }

    Ok(RuleCatalog::new(rules))
}

fn build_rule(config: &RuleConfig) -> Result<LanguageRule> {
    LanguageRule::from_config(config).map_err(|reason| Error::RuleInvalid {
        lang: config.lang.clone(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads_all_languages() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), EMBEDDED_TABLES.len());
        for (code, _) in EMBEDDED_TABLES {
            assert!(
                catalog.rule_for(code).is_some(),
                "missing bundled language {code}"
            );
        }
    }

    #[test]
    fn test_builtin_catalog_is_shared() {
        let a = builtin_catalog();
        let b = builtin_catalog();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_builtin_codes_match_registration() {
        for (code, toml_content) in EMBEDDED_TABLES {
            let config: RuleConfig = toml::from_str(toml_content).unwrap();
            assert_eq!(&config.lang, code);
            config.validate().unwrap();
        }
    }

    #[test]
    fn test_catalog_from_toml() {
        let catalog = catalog_from_toml(
            r#"
            [[rules]]
            lang = "aa"
            vowels = "aeiou"
            consonants = "bcdfg"
            sonorants = ""

            [[rules]]
            lang = "bb"
            vowels = "aeiou"
            consonants = "bcdfgz"
            sonorants = ""
        "#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.rule_for("aa").is_some());
    }

    #[test]
    fn test_catalog_from_toml_rejects_duplicates() {
        let result = catalog_from_toml(
            r#"
            [[rules]]
            lang = "aa"
            vowels = "a"
            consonants = "b"
            sonorants = ""

            [[rules]]
            lang = "aa"
            vowels = "a"
            consonants = "b"
            sonorants = ""
        "#,
        );
        assert!(matches!(result, Err(Error::DuplicateLanguage(code)) if code == "aa"));
    }

    #[test]
    fn test_catalog_from_toml_rejects_malformed_input() {
        assert!(matches!(
            catalog_from_toml("rules = 3"),
            Err(Error::RuleParse { .. })
        ));
    }

    #[test]
    fn test_empty_document_yields_empty_catalog() {
        let catalog = catalog_from_toml("").unwrap();
        assert!(catalog.is_empty());
    }
}
