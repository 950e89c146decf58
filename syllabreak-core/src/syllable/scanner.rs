//! Text scanner
//!
//! Splits running text into maximal alphabetic runs (words) and
//! passthrough runs. Words are handed to the word syllabifier;
//! everything else, including previously inserted soft hyphens, is
//! copied through untouched.

use crate::language::LanguageRule;
use crate::syllable::tokenizer::lower_char;
use crate::syllable::word::WordSyllabifier;

/// A word run holds letters plus the rule's own in-word separators
/// (e.g. the Ukrainian apostrophe), which the tokenizer classifies
/// itself.
fn is_word_char(ch: char, rule: &LanguageRule) -> bool {
    ch.is_alphabetic() || rule.is_separator(lower_char(ch))
}

/// Apply `rule` to every word of `text`, leaving non-letter runs
/// unchanged.
pub fn syllabify_text(text: &str, rule: &LanguageRule, separator: &str) -> String {
    let syllabifier = WordSyllabifier::new(rule, separator);
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for ch in text.chars() {
        if is_word_char(ch, rule) {
            word.push(ch);
        } else {
            if !word.is_empty() {
                out.push_str(&syllabifier.syllabify(&word));
                word.clear();
            }
            out.push(ch);
        }
    }
    if !word.is_empty() {
        out.push_str(&syllabifier.syllabify(&word));
    }

    out
}
