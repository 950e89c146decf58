//! Boundary placement between nuclei
//!
//! For each adjacent pair of nuclei, inspects the intervening
//! consonant cluster and decides where the syllable boundary goes:
//! maximal onset by default, adjusted by onset legality, long-vowel
//! gating, and the protected-rime exception tables.

use crate::language::LanguageRule;
use crate::syllable::token::Token;

/// Boundary placer for one tokenized word
pub struct BoundaryPlacer<'a> {
    tokens: &'a [Token],
    rule: &'a LanguageRule,
}

impl<'a> BoundaryPlacer<'a> {
    pub fn new(tokens: &'a [Token], rule: &'a LanguageRule) -> Self {
        Self { tokens, rule }
    }

    /// Token indices that receive a separator immediately before them.
    ///
    /// At most one boundary per nucleus pair, so the result never
    /// exceeds `nuclei.len() - 1` entries.
    pub fn place(&self, nuclei: &[usize]) -> Vec<usize> {
        let mut boundaries = Vec::new();
        for pair in nuclei.windows(2) {
            let (nk, nk1) = (pair[0], pair[1]);
            let cluster = self.cluster_between(nk, nk1);
            if let Some(boundary) = self.boundary_in_cluster(&cluster, nk, nk1) {
                boundaries.push(boundary);
            }
        }
        boundaries
    }

    /// Consonant token indices between two nuclei, with leading and
    /// trailing separators trimmed.
    fn cluster_between(&self, nk: usize, nk1: usize) -> Vec<usize> {
        let mut left = nk + 1;
        while left < nk1 && self.tokens[left].is_separator() {
            left += 1;
        }
        let mut right = nk1;
        while right > left && self.tokens[right - 1].is_separator() {
            right -= 1;
        }

        (left..right)
            .filter(|&i| self.tokens[i].is_consonant())
            .collect()
    }

    fn boundary_in_cluster(&self, cluster: &[usize], nk: usize, nk1: usize) -> Option<usize> {
        match cluster.len() {
            0 => self.hiatus_boundary(nk, nk1),
            1 => self.single_consonant_boundary(cluster[0], nk, nk1),
            2 => Some(self.two_consonant_boundary(cluster, nk)),
            _ => Some(self.long_cluster_boundary(cluster, nk)),
        }
    }

    /// Vowel-adjacent gap: split only when the rule asks for hiatus
    /// splitting and the two nuclei do not spell a vowel digraph.
    fn hiatus_boundary(&self, nk: usize, nk1: usize) -> Option<usize> {
        if !self.rule.split_hiatus() {
            return None;
        }

        let adjacent = nk1 - nk == 1
            || self.tokens[nk + 1..nk1].iter().all(Token::is_separator);
        if !adjacent {
            return None;
        }

        let pair = format!(
            "{}{}",
            self.tokens[nk].surface_lower(),
            self.tokens[nk1].surface_lower()
        );
        if self.rule.is_vowel_digraph(&pair) {
            return None;
        }
        Some(nk1)
    }

    /// V-CV: boundary before the consonant, unless the nuclei spell a
    /// protected rime (care, here, more), in which case the suffix
    /// tables decide between splitting after the consonant and not
    /// splitting at all.
    fn single_consonant_boundary(&self, consonant: usize, nk: usize, nk1: usize) -> Option<usize> {
        if self.rule.has_protected_sequences() {
            let sequence = self.joined_lower(nk, nk1 + 1);

            if self.rule.is_protected_sequence(&sequence) {
                let rest_with_nucleus = self.joined_lower(nk1, self.tokens.len());
                let rest_after_nucleus = self.joined_lower(nk1 + 1, self.tokens.len());

                // Breaking suffix (par-ent): split before the nucleus.
                for suffix in self.rule.breaking_suffixes() {
                    if rest_with_nucleus == suffix || rest_with_nucleus.starts_with(suffix) {
                        return Some(nk1);
                    }
                }

                // Word end or light suffix (care, care-less): no split.
                let at_end = nk1 == self.tokens.len() - 1;
                let light_suffix =
                    !rest_after_nucleus.is_empty() && self.rule.is_keep_suffix(&rest_after_nucleus);
                if at_end || light_suffix {
                    return None;
                }
            }
        }

        Some(consonant)
    }

    fn two_consonant_boundary(&self, cluster: &[usize], nk: usize) -> usize {
        if self.is_valid_onset(cluster[0], cluster[1], nk) {
            cluster[0]
        } else {
            cluster[1]
        }
    }

    /// Three or more consonants: keep the longest legal onset with the
    /// following nucleus.
    fn long_cluster_boundary(&self, cluster: &[usize], nk: usize) -> usize {
        let last = cluster.len() - 1;
        if self.is_valid_onset(cluster[last - 1], cluster[last], nk) {
            cluster[last - 1]
        } else {
            cluster[last]
        }
    }

    /// Onset legality: listed in `clusters_keep_next`, and when the
    /// cluster is long-gated, the preceding nucleus must be long.
    fn is_valid_onset(&self, first: usize, second: usize, prev_nucleus: usize) -> bool {
        let candidate = format!(
            "{}{}",
            self.tokens[first].surface_lower(),
            self.tokens[second].surface_lower()
        );

        if self.rule.requires_long_nucleus(&candidate) && !self.is_long_nucleus(prev_nucleus) {
            return false;
        }

        self.rule.is_onset_cluster(&candidate)
    }

    /// A nucleus is long when its surface is already a vowel digraph,
    /// or it forms one together with the next token's surface.
    fn is_long_nucleus(&self, nucleus: usize) -> bool {
        let Some(token) = self.tokens.get(nucleus) else {
            return false;
        };

        if self.rule.is_vowel_digraph(&token.surface_lower()) {
            return true;
        }

        if let Some(next) = self.tokens.get(nucleus + 1) {
            let pair = format!("{}{}", token.surface_lower(), next.surface_lower());
            if self.rule.is_vowel_digraph(&pair) {
                return true;
            }
        }

        false
    }

    fn joined_lower(&self, from: usize, to: usize) -> String {
        self.tokens[from..to.min(self.tokens.len())]
            .iter()
            .map(Token::surface_lower)
            .collect()
    }
}
