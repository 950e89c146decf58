//! Rule catalog and language detection
//!
//! Holds every loaded rule, derives each rule's unique character set
//! once at construction, and scores input text against all rules.

use std::collections::HashSet;

use tracing::debug;

use crate::language::rule::LanguageRule;

/// Immutable collection of loaded language rules
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<LanguageRule>,
}

impl RuleCatalog {
    /// Build a catalog, deriving `unique_chars` for every rule.
    ///
    /// A rule's unique characters are those appearing in no other
    /// loaded rule's vowel or consonant inventory. An empty rule list
    /// yields a catalog that matches nothing.
    pub fn new(mut rules: Vec<LanguageRule>) -> Self {
        let inventories: Vec<HashSet<char>> = rules.iter().map(|r| r.all_chars()).collect();

        for (i, rule) in rules.iter_mut().enumerate() {
            let mut unique = inventories[i].clone();
            for (j, other) in inventories.iter().enumerate() {
                if i != j {
                    unique.retain(|c| !other.contains(c));
                }
            }
            debug!(
                lang = rule.code(),
                unique = unique.len(),
                "derived unique character set"
            );
            rule.set_unique_chars(unique);
        }

        Self { rules }
    }

    /// Number of loaded rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are loaded
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Loaded rules in catalog order
    pub fn rules(&self) -> &[LanguageRule] {
        &self.rules
    }

    /// Exact-match lookup by language code
    pub fn rule_for(&self, code: &str) -> Option<&LanguageRule> {
        self.rules.iter().find(|r| r.code() == code)
    }

    /// Every character known to any loaded rule
    pub fn all_known_chars(&self) -> HashSet<char> {
        let mut all = HashSet::new();
        for rule in &self.rules {
            all.extend(rule.all_chars());
        }
        all
    }

    /// Rank rules against `text`, best match first.
    ///
    /// Scores are the fraction of the text's letters covered by each
    /// rule; a rule containing a character unique to it among all
    /// loaded rules is decisive and scores 1.0 outright. Zero-scoring
    /// rules are dropped. The sort is stable so equal scores keep
    /// catalog order.
    pub fn detect(&self, text: &str) -> Vec<&LanguageRule> {
        if text.is_empty() {
            return Vec::new();
        }

        let clean: Vec<char> = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();
        if clean.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(&LanguageRule, f64)> = Vec::new();
        for rule in &self.rules {
            let mut score = rule.match_score(text);
            if score > 0.0 {
                let unique = rule.unique_chars();
                if !unique.is_empty() && clean.iter().any(|c| unique.contains(c)) {
                    score = 1.0;
                }
                matches.push((rule, score));
            }
        }

        // Vec::sort_by is stable; ties keep catalog order.
        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!(candidates = matches.len(), "language detection ranked");
        matches.into_iter().map(|(rule, _)| rule).collect()
    }

    /// `detect`, reduced to language codes
    pub fn detect_codes(&self, text: &str) -> Vec<String> {
        self.detect(text)
            .into_iter()
            .map(|r| r.code().to_string())
            .collect()
    }
}
