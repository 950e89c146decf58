//! Configuration structures and validation
//!
//! This module defines the TOML schema for a per-language rule table.

use serde::{Deserialize, Serialize};

/// One language rule record as stored on disk.
///
/// Character classes are flat strings of characters; cluster and
/// exception tables are arrays of lowercase strings. Field names are
/// the external contract shared with the bundled rule tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Language code, e.g. "en" or "sr-latn"
    pub lang: String,
    /// Vowel inventory
    pub vowels: String,
    /// Consonant inventory
    pub consonants: String,
    /// Sonorant consonants (classified as consonants by the tokenizer)
    pub sonorants: String,

    /// Two-letter onsets kept whole with the following syllable
    #[serde(default)]
    pub clusters_keep_next: Vec<String>,
    /// Consonant digraphs tokenized as a single unit
    #[serde(default)]
    pub dont_split_digraphs: Vec<String>,
    /// Vowel digraphs tokenized as a single unit
    #[serde(default)]
    pub digraph_vowels: Vec<String>,
    /// Onsets legal only after a long nucleus
    #[serde(default)]
    pub clusters_only_after_long: Vec<String>,
    /// Protected rime sequences (nucleus + consonant + nucleus)
    #[serde(default)]
    pub final_sequences_keep: Vec<String>,
    /// Suffixes that force a protected sequence to split
    #[serde(default)]
    pub suffixes_break_vre: Vec<String>,
    /// Light suffixes that keep a protected sequence whole
    #[serde(default)]
    pub suffixes_keep_vre: Vec<String>,

    /// Glide consonants
    #[serde(default)]
    pub glides: String,
    /// Consonants that can carry a syllable
    #[serde(default)]
    pub syllabic_consonants: String,
    /// Modifier characters that attach to the preceding token
    #[serde(default)]
    pub modifiers_attach_left: String,
    /// Modifier characters that attach to the following token
    #[serde(default)]
    pub modifiers_attach_right: String,
    /// In-word separator characters (e.g. the Ukrainian apostrophe)
    #[serde(default)]
    pub modifiers_separators: String,
    /// Word-final semivowels that do not carry a syllable
    #[serde(default)]
    pub final_semivowels: String,

    /// Split adjacent vowels that do not form a digraph
    #[serde(default)]
    pub split_hiatus: bool,
}

impl RuleConfig {
    /// Validate the record before building runtime tables
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.lang.is_empty() {
            return Err("empty language code".to_string());
        }
        if self.vowels.is_empty() {
            return Err("no vowels defined".to_string());
        }
        if self.consonants.is_empty() {
            return Err("no consonants defined".to_string());
        }

        // Digraph tables drive a fixed two-then-one probe in the
        // tokenizer; longer entries would never match.
        for entry in self
            .dont_split_digraphs
            .iter()
            .chain(self.digraph_vowels.iter())
        {
            if entry.chars().count() > 2 {
                return Err(format!("digraph entry '{entry}' longer than two characters"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_config_deserialize() {
        let toml_str = r#"
            lang = "en"
            vowels = "aeiouy"
            consonants = "bcdfghjklmnpqrstvwxz"
            sonorants = "lmnr"
            clusters_keep_next = ["pl", "pr", "tr", "st"]
            dont_split_digraphs = ["ch", "sh", "th"]
            digraph_vowels = ["ea", "ee", "oo"]
            glides = "wy"
            split_hiatus = false
        "#;

        let config: RuleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lang, "en");
        assert_eq!(config.clusters_keep_next.len(), 4);
        assert_eq!(config.dont_split_digraphs.len(), 3);
        assert!(!config.split_hiatus);
        assert!(config.modifiers_attach_left.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_long_digraphs() {
        let config = RuleConfig {
            lang: "xx".to_string(),
            vowels: "a".to_string(),
            consonants: "b".to_string(),
            sonorants: String::new(),
            clusters_keep_next: vec![],
            dont_split_digraphs: vec!["sch".to_string()],
            digraph_vowels: vec![],
            clusters_only_after_long: vec![],
            final_sequences_keep: vec![],
            suffixes_break_vre: vec![],
            suffixes_keep_vre: vec![],
            glides: String::new(),
            syllabic_consonants: String::new(),
            modifiers_attach_left: String::new(),
            modifiers_attach_right: String::new(),
            modifiers_separators: String::new(),
            final_semivowels: String::new(),
            split_hiatus: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_classes() {
        let toml_str = r#"
            lang = "xx"
            vowels = ""
            consonants = "b"
            sonorants = ""
        "#;
        let config: RuleConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }
}
