//! Nucleus selection
//!
//! Picks the syllable-bearing token indices: vowels, minus a trailing
//! non-syllabic semivowel, plus syllabic consonants where the rule
//! allows them.

use crate::language::LanguageRule;
use crate::syllable::token::{Token, TokenClass};
use crate::syllable::tokenizer::lower_char;

/// Compute the strictly increasing nucleus index list for a token
/// sequence. May be empty.
pub fn find_nuclei(tokens: &[Token], rule: &LanguageRule) -> Vec<usize> {
    let mut nuclei: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_vowel())
        .map(|(i, _)| i)
        .collect();

    remove_final_semivowel(tokens, &mut nuclei, rule);
    add_syllabic_consonants(tokens, &mut nuclei, rule);

    if !nuclei.is_empty() {
        return nuclei;
    }

    // Vowel-less word: accept syllabic consonants anywhere.
    fallback_syllabic_consonants(tokens, rule)
}

/// Drop the last nucleus when it is a word-final semivowel riding on a
/// consonant (offglides, palatalization markers).
fn remove_final_semivowel(tokens: &[Token], nuclei: &mut Vec<usize>, rule: &LanguageRule) {
    if !rule.has_final_semivowels() || nuclei.is_empty() {
        return;
    }

    let last = *nuclei.last().expect("checked non-empty");
    let is_final = tokens[last + 1..]
        .iter()
        .all(|t| matches!(t.class, TokenClass::Separator | TokenClass::Other));
    if !is_final {
        return;
    }

    let Some(first_char) = tokens[last].surface.chars().next() else {
        return;
    };
    if !rule.is_final_semivowel(lower_char(first_char)) {
        return;
    }

    if last > 0 && tokens[last - 1].is_consonant() {
        nuclei.pop();
    }
}

/// Promote syllabic consonants that sit in a consonant environment
/// with at least one token of buffer to the nearest vowel.
fn add_syllabic_consonants(tokens: &[Token], nuclei: &mut Vec<usize>, rule: &LanguageRule) {
    if !rule.has_syllabic_consonants() || nuclei.is_empty() {
        return;
    }

    let mut promoted = false;
    for (i, token) in tokens.iter().enumerate() {
        if is_syllabic_candidate(token, rule)
            && surrounded_by_consonants(tokens, i)
            && buffered_from_vowels(tokens, i)
            && !nuclei.contains(&i)
        {
            nuclei.push(i);
            promoted = true;
        }
    }
    if promoted {
        nuclei.sort_unstable();
    }
}

fn is_syllabic_candidate(token: &Token, rule: &LanguageRule) -> bool {
    if !token.is_consonant() || token.len_chars() != 1 {
        return false;
    }
    token
        .surface
        .chars()
        .next()
        .is_some_and(|c| rule.is_syllabic_consonant(lower_char(c)))
}

fn surrounded_by_consonants(tokens: &[Token], index: usize) -> bool {
    let prev_ok = index == 0 || tokens[index - 1].is_consonant();
    let next_ok = index == tokens.len() - 1 || tokens[index + 1].is_consonant();
    prev_ok && next_ok
}

/// A candidate must be more than one token from the nearest vowel on
/// each side; adjacency to a real vowel means the vowel carries the
/// syllable.
fn buffered_from_vowels(tokens: &[Token], index: usize) -> bool {
    let dist_prev = tokens[..index]
        .iter()
        .rev()
        .position(|t| t.is_vowel())
        .map(|p| p + 1)
        .unwrap_or(index + 1);

    let dist_next = tokens[index + 1..]
        .iter()
        .position(|t| t.is_vowel())
        .map(|p| p + 1)
        .unwrap_or(tokens.len() - index);

    dist_prev > 1 && dist_next > 1
}

fn fallback_syllabic_consonants(tokens: &[Token], rule: &LanguageRule) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| is_syllabic_candidate(t, rule))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::RuleConfig;
    use crate::syllable::tokenizer::tokenize;

    fn rule(toml_str: &str) -> LanguageRule {
        let config: RuleConfig = toml::from_str(toml_str).unwrap();
        LanguageRule::from_config(&config).unwrap()
    }

    fn serbian() -> LanguageRule {
        rule(
            r#"
            lang = "sr-latn"
            vowels = "aeiou"
            consonants = "bcdfghjklmnprstvz"
            sonorants = "jlmnrv"
            syllabic_consonants = "r"
        "#,
        )
    }

    fn romanian() -> LanguageRule {
        rule(
            r#"
            lang = "ro"
            vowels = "aeiou"
            consonants = "bcdfghjklmnprstvxz"
            sonorants = "lmnr"
            final_semivowels = "i"
        "#,
        )
    }

    #[test]
    fn test_vowel_nuclei() {
        let rule = serbian();
        let tokens = tokenize("banana", &rule);
        assert_eq!(find_nuclei(&tokens, &rule), vec![1, 3, 5]);
    }

    #[test]
    fn test_final_semivowel_dropped_after_consonant() {
        let rule = romanian();
        let tokens = tokenize("lupi", &rule);
        // Final -i marks palatalization, not a syllable.
        assert_eq!(find_nuclei(&tokens, &rule), vec![1]);
    }

    #[test]
    fn test_final_semivowel_kept_after_vowel() {
        let rule = romanian();
        let tokens = tokenize("lupii", &rule);
        // The -i follows another vowel, so it stays syllabic.
        assert_eq!(find_nuclei(&tokens, &rule), vec![1, 3, 4]);
    }

    #[test]
    fn test_non_final_semivowel_kept() {
        let rule = romanian();
        let tokens = tokenize("lipsa", &rule);
        assert_eq!(find_nuclei(&tokens, &rule), vec![1, 4]);
    }

    #[test]
    fn test_fallback_syllabic_consonants() {
        let rule = serbian();
        let tokens = tokenize("prst", &rule);
        // No vowels at all; vocalic r carries the word.
        assert_eq!(find_nuclei(&tokens, &rule), vec![1]);
    }

    #[test]
    fn test_syllabic_promotion_needs_buffer() {
        let rule = serbian();
        // "brata": r is adjacent to a vowel, so it is not promoted.
        let tokens = tokenize("brata", &rule);
        assert_eq!(find_nuclei(&tokens, &rule), vec![2, 4]);
    }

    #[test]
    fn test_syllabic_promotion_between_consonants() {
        let rule = serbian();
        // "zatrgnuti"-like shape: r sits in a consonant pocket away
        // from both vowels.
        let tokens = tokenize("umrtviti", &rule);
        let nuclei = find_nuclei(&tokens, &rule);
        assert!(nuclei.contains(&2), "vocalic r should be promoted: {nuclei:?}");
    }

    #[test]
    fn test_no_nuclei_without_vowels_or_syllabics() {
        let rule = romanian();
        let tokens = tokenize("brr", &rule);
        assert!(find_nuclei(&tokens, &rule).is_empty());
    }
}
