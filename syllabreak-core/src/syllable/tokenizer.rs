//! Word tokenizer
//!
//! Converts one word into a sequence of classified tokens, consuming
//! modifiers, separators, and digraphs with a fixed precedence order.
//! Left-attaching modifiers and separators must be tried before
//! digraphs, and digraphs before single characters, otherwise the rule
//! tables cannot express "treat these two letters as one unit".

use crate::language::LanguageRule;
use crate::syllable::token::{Token, TokenClass};

/// Lowercase a single character without changing its width.
///
/// A handful of characters expand under full case folding (İ becomes
/// two scalars); taking the first mapped character keeps token spans
/// aligned with the source word.
#[inline]
pub(crate) fn lower_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Single-word tokenizer, parameterized by a language rule
pub struct Tokenizer<'r> {
    rule: &'r LanguageRule,
    chars: Vec<char>,
    lower: Vec<char>,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'r> Tokenizer<'r> {
    /// Prepare a tokenizer for one word
    pub fn new(word: &str, rule: &'r LanguageRule) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let lower: Vec<char> = chars.iter().map(|&c| lower_char(c)).collect();
        Self {
            rule,
            chars,
            lower,
            tokens: Vec::new(),
            pos: 0,
        }
    }

    /// Consume the word and produce its token sequence
    pub fn tokenize(mut self) -> Vec<Token> {
        while self.pos < self.chars.len() {
            if self.try_left_modifier() {
                continue;
            }
            if self.try_separator() {
                continue;
            }
            if self.try_digraph(TokenClass::Consonant) {
                continue;
            }
            if self.try_digraph(TokenClass::Vowel) {
                continue;
            }
            self.push_single();
        }
        self.tokens
    }

    /// Fold a left-attaching modifier into the previous token, or emit
    /// it standalone when the word starts with one.
    fn try_left_modifier(&mut self) -> bool {
        if !self.rule.is_left_modifier(self.lower[self.pos]) {
            return false;
        }

        let ch = self.chars[self.pos];
        match self.tokens.last_mut() {
            Some(prev) => {
                prev.surface.push(ch);
                prev.end = self.pos + 1;
                prev.is_modifier = true;
            }
            None => {
                let mut token = Token::new(ch, TokenClass::Other, self.pos, self.pos + 1);
                token.is_modifier = true;
                self.tokens.push(token);
            }
        }
        self.pos += 1;
        true
    }

    fn try_separator(&mut self) -> bool {
        if !self.rule.is_separator(self.lower[self.pos]) {
            return false;
        }

        self.tokens.push(Token::new(
            self.chars[self.pos],
            TokenClass::Separator,
            self.pos,
            self.pos + 1,
        ));
        self.pos += 1;
        true
    }

    /// Probe a two-character then a one-character substring against the
    /// rule's digraph table for `class`.
    fn try_digraph(&mut self, class: TokenClass) -> bool {
        for len in [2usize, 1] {
            if self.pos + len > self.chars.len() {
                continue;
            }
            let probe: String = self.lower[self.pos..self.pos + len].iter().collect();
            let hit = match class {
                TokenClass::Consonant => self.rule.is_consonant_digraph(&probe),
                TokenClass::Vowel => self.rule.is_vowel_digraph(&probe),
                _ => false,
            };
            if hit {
                let surface: String = self.chars[self.pos..self.pos + len].iter().collect();
                self.tokens
                    .push(Token::new(surface, class, self.pos, self.pos + len));
                self.pos += len;
                return true;
            }
        }
        false
    }

    /// Classify one character: vowel first, then consonant-like, then
    /// other. Glides and sonorants are consonant-class.
    fn push_single(&mut self) {
        let lower = self.lower[self.pos];
        let ch = self.chars[self.pos];

        let token = if self.rule.is_vowel(lower) {
            Token::new(ch, TokenClass::Vowel, self.pos, self.pos + 1)
        } else if self.rule.is_consonant(lower)
            || self.rule.is_glide(lower)
            || self.rule.is_sonorant(lower)
        {
            let mut token = Token::new(ch, TokenClass::Consonant, self.pos, self.pos + 1);
            token.is_glide = self.rule.is_glide(lower);
            token
        } else {
            Token::new(ch, TokenClass::Other, self.pos, self.pos + 1)
        };

        self.tokens.push(token);
        self.pos += 1;
    }
}

/// Tokenize one word with the given rule
pub fn tokenize(word: &str, rule: &LanguageRule) -> Vec<Token> {
    Tokenizer::new(word, rule).tokenize()
}
