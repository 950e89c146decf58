//! Single-word syllabification
//!
//! Orchestrates tokenization, nucleus selection, and boundary
//! placement, then rebuilds the word with the separator inserted.

use crate::language::LanguageRule;
use crate::syllable::boundary::BoundaryPlacer;
use crate::syllable::nuclei::find_nuclei;
use crate::syllable::token::Token;
use crate::syllable::tokenizer::tokenize;

/// Syllabifier for one word under one rule
pub struct WordSyllabifier<'a> {
    rule: &'a LanguageRule,
    separator: &'a str,
}

impl<'a> WordSyllabifier<'a> {
    pub fn new(rule: &'a LanguageRule, separator: &'a str) -> Self {
        Self { rule, separator }
    }

    /// Syllabify `word`, returning it unchanged when fewer than two
    /// nuclei exist or no boundary was placed.
    pub fn syllabify(&self, word: &str) -> String {
        let tokens = tokenize(word, self.rule);
        let nuclei = find_nuclei(&tokens, self.rule);
        if nuclei.len() < 2 {
            return word.to_string();
        }

        let boundaries = BoundaryPlacer::new(&tokens, self.rule).place(&nuclei);
        if boundaries.is_empty() {
            return word.to_string();
        }

        self.rebuild(&tokens, &boundaries)
    }

    fn rebuild(&self, tokens: &[Token], boundaries: &[usize]) -> String {
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if boundaries.contains(&i) {
                out.push_str(self.separator);
            }
            out.push_str(&token.surface);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::RuleConfig;

    fn english() -> LanguageRule {
        let config: RuleConfig = toml::from_str(
            r#"
            lang = "en"
            vowels = "aeiou"
            consonants = "bcdfghjklmnpqrstvwxyz"
            sonorants = "lmnr"
            clusters_keep_next = ["pl", "pr", "tr", "st", "bl", "br"]
        "#,
        )
        .unwrap();
        LanguageRule::from_config(&config).unwrap()
    }

    #[test]
    fn test_basic_words() {
        let rule = english();
        let syllabifier = WordSyllabifier::new(&rule, "-");
        assert_eq!(syllabifier.syllabify("apple"), "ap-ple");
        assert_eq!(syllabifier.syllabify("banana"), "ba-na-na");
    }

    #[test]
    fn test_single_nucleus_unchanged() {
        let rule = english();
        let syllabifier = WordSyllabifier::new(&rule, "-");
        assert_eq!(syllabifier.syllabify("cat"), "cat");
        assert_eq!(syllabifier.syllabify("strength"), "strength");
    }

    #[test]
    fn test_no_nuclei_unchanged() {
        let rule = english();
        let syllabifier = WordSyllabifier::new(&rule, "-");
        assert_eq!(syllabifier.syllabify("pfft"), "pfft");
        assert_eq!(syllabifier.syllabify(""), "");
    }

    #[test]
    fn test_case_preserved() {
        let rule = english();
        let syllabifier = WordSyllabifier::new(&rule, "-");
        assert_eq!(syllabifier.syllabify("Banana"), "Ba-na-na");
        assert_eq!(syllabifier.syllabify("BANANA"), "BA-NA-NA");
    }

    #[test]
    fn test_custom_separator() {
        let rule = english();
        let syllabifier = WordSyllabifier::new(&rule, "\u{00AD}");
        assert_eq!(syllabifier.syllabify("banana"), "ba\u{00AD}na\u{00AD}na");
    }
}
