//! Runtime form of a language rule
//!
//! Bridges the TOML schema and the hot-path lookups used by the
//! tokenizer and boundary placer. All tables are built once and never
//! mutated afterwards.

use std::collections::HashSet;

use crate::language::config::RuleConfig;

/// Immutable per-language rule with set-based lookup tables
#[derive(Debug, Clone)]
pub struct LanguageRule {
    code: String,

    vowels: HashSet<char>,
    consonants: HashSet<char>,
    sonorants: HashSet<char>,

    clusters_keep_next: HashSet<String>,
    dont_split_digraphs: HashSet<String>,
    digraph_vowels: HashSet<String>,
    clusters_only_after_long: HashSet<String>,
    final_sequences_keep: HashSet<String>,
    suffixes_break_vre: HashSet<String>,
    suffixes_keep_vre: HashSet<String>,

    glides: HashSet<char>,
    syllabic_consonants: HashSet<char>,
    modifiers_attach_left: HashSet<char>,
    #[allow(dead_code)]
    modifiers_attach_right: HashSet<char>,
    modifiers_separators: HashSet<char>,
    final_semivowels: HashSet<char>,

    split_hiatus: bool,

    /// Characters found in no other loaded rule; filled in by the
    /// catalog after all rules are known.
    unique_chars: HashSet<char>,
}

impl LanguageRule {
    /// Build runtime tables from a validated configuration record
    pub fn from_config(config: &RuleConfig) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            code: config.lang.clone(),
            vowels: config.vowels.chars().collect(),
            consonants: config.consonants.chars().collect(),
            sonorants: config.sonorants.chars().collect(),
            clusters_keep_next: config.clusters_keep_next.iter().cloned().collect(),
            dont_split_digraphs: config.dont_split_digraphs.iter().cloned().collect(),
            digraph_vowels: config.digraph_vowels.iter().cloned().collect(),
            clusters_only_after_long: config.clusters_only_after_long.iter().cloned().collect(),
            final_sequences_keep: config.final_sequences_keep.iter().cloned().collect(),
            suffixes_break_vre: config.suffixes_break_vre.iter().cloned().collect(),
            suffixes_keep_vre: config.suffixes_keep_vre.iter().cloned().collect(),
            glides: config.glides.chars().collect(),
            syllabic_consonants: config.syllabic_consonants.chars().collect(),
            modifiers_attach_left: config.modifiers_attach_left.chars().collect(),
            modifiers_attach_right: config.modifiers_attach_right.chars().collect(),
            modifiers_separators: config.modifiers_separators.chars().collect(),
            final_semivowels: config.final_semivowels.chars().collect(),
            split_hiatus: config.split_hiatus,
            unique_chars: HashSet::new(),
        })
    }

    /// Language code, e.g. "en"
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(&ch)
    }

    #[inline]
    pub fn is_consonant(&self, ch: char) -> bool {
        self.consonants.contains(&ch)
    }

    #[inline]
    pub fn is_sonorant(&self, ch: char) -> bool {
        self.sonorants.contains(&ch)
    }

    #[inline]
    pub fn is_glide(&self, ch: char) -> bool {
        self.glides.contains(&ch)
    }

    #[inline]
    pub fn is_syllabic_consonant(&self, ch: char) -> bool {
        self.syllabic_consonants.contains(&ch)
    }

    pub fn has_syllabic_consonants(&self) -> bool {
        !self.syllabic_consonants.is_empty()
    }

    #[inline]
    pub fn is_left_modifier(&self, ch: char) -> bool {
        self.modifiers_attach_left.contains(&ch)
    }

    #[inline]
    pub fn is_separator(&self, ch: char) -> bool {
        self.modifiers_separators.contains(&ch)
    }

    #[inline]
    pub fn is_final_semivowel(&self, ch: char) -> bool {
        self.final_semivowels.contains(&ch)
    }

    pub fn has_final_semivowels(&self) -> bool {
        !self.final_semivowels.is_empty()
    }

    pub fn is_consonant_digraph(&self, s: &str) -> bool {
        self.dont_split_digraphs.contains(s)
    }

    pub fn is_vowel_digraph(&self, s: &str) -> bool {
        self.digraph_vowels.contains(s)
    }

    pub fn is_onset_cluster(&self, s: &str) -> bool {
        self.clusters_keep_next.contains(s)
    }

    pub fn requires_long_nucleus(&self, s: &str) -> bool {
        self.clusters_only_after_long.contains(s)
    }

    pub fn is_protected_sequence(&self, s: &str) -> bool {
        self.final_sequences_keep.contains(s)
    }

    pub fn has_protected_sequences(&self) -> bool {
        !self.final_sequences_keep.is_empty()
    }

    pub fn breaking_suffixes(&self) -> impl Iterator<Item = &str> {
        self.suffixes_break_vre.iter().map(String::as_str)
    }

    pub fn is_keep_suffix(&self, s: &str) -> bool {
        self.suffixes_keep_vre.contains(s)
    }

    pub fn split_hiatus(&self) -> bool {
        self.split_hiatus
    }

    /// Membership in vowels or consonants, the classes that count for
    /// language detection.
    #[inline]
    pub fn contains_char(&self, ch: char) -> bool {
        self.vowels.contains(&ch) || self.consonants.contains(&ch)
    }

    /// Union of the vowel and consonant inventories
    pub fn all_chars(&self) -> HashSet<char> {
        self.vowels.union(&self.consonants).copied().collect()
    }

    pub fn unique_chars(&self) -> &HashSet<char> {
        &self.unique_chars
    }

    pub(crate) fn set_unique_chars(&mut self, chars: HashSet<char>) {
        self.unique_chars = chars;
    }

    /// Fraction of the alphabetic characters of `text` covered by this
    /// rule's inventories. Zero when the text has no letters.
    pub fn match_score(&self, text: &str) -> f64 {
        let clean: Vec<char> = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();
        if clean.is_empty() {
            return 0.0;
        }

        let matching = clean.iter().filter(|c| self.contains_char(**c)).count();
        matching as f64 / clean.len() as f64
    }
}
