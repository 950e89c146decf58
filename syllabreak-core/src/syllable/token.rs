//! Phonologically classed word units

/// Phonological class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Vowel or vowel digraph
    Vowel,
    /// Consonant, consonant digraph, glide, or sonorant
    Consonant,
    /// In-word separator (never counts as a consonant)
    Separator,
    /// Anything the rule does not classify
    Other,
}

/// One matched unit of a word.
///
/// `surface` preserves the original casing; the `[start, end)` span is
/// in character indices. Concatenating the surfaces of a word's token
/// sequence reconstructs the word exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Literal matched substring, original case
    pub surface: String,
    /// Phonological class
    pub class: TokenClass,
    /// True for glide consonants
    pub is_glide: bool,
    /// True when a modifier character was folded into this token
    pub is_modifier: bool,
    /// Span start, inclusive
    pub start: usize,
    /// Span end, exclusive
    pub end: usize,
}

impl Token {
    /// Create a token without glide or modifier flags
    pub fn new(surface: impl Into<String>, class: TokenClass, start: usize, end: usize) -> Self {
        Self {
            surface: surface.into(),
            class,
            is_glide: false,
            is_modifier: false,
            start,
            end,
        }
    }

    /// True for vowel-class tokens
    #[inline]
    pub fn is_vowel(&self) -> bool {
        self.class == TokenClass::Vowel
    }

    /// True for consonant-class tokens
    #[inline]
    pub fn is_consonant(&self) -> bool {
        self.class == TokenClass::Consonant
    }

    /// True for separator-class tokens
    #[inline]
    pub fn is_separator(&self) -> bool {
        self.class == TokenClass::Separator
    }

    /// Lowercased surface, used for table lookups
    pub fn surface_lower(&self) -> String {
        self.surface.to_lowercase()
    }

    /// Number of characters in the surface
    pub fn len_chars(&self) -> usize {
        self.surface.chars().count()
    }
}
