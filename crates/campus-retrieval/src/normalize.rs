//! Query normalization: lower-case, strip punctuation, collapse whitespace,
//! and extract content tokens.

use std::collections::HashSet;

use campus_core::catalog::Lexicon;
use campus_core::models::NormalizedQuery;

/// Lower-case `raw`, replace every non-word, non-space character with a
/// space, and collapse whitespace runs to single spaces.
///
/// Total and idempotent. Characters outside ASCII are kept when they are
/// alphanumeric.
pub fn normalize_text(raw: &str) -> String {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizer bound to a stop-word and important-word lexicon.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: HashSet<String>,
    important_words: HashSet<String>,
}

impl Normalizer {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            stop_words: lexicon.stop_words.iter().map(|w| w.to_lowercase()).collect(),
            important_words: lexicon
                .important_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    pub fn normalize(&self, raw: &str) -> NormalizedQuery {
        let text = normalize_text(raw);
        let tokens = self.content_tokens(&text);
        NormalizedQuery { text, tokens }
    }

    /// Tokens longer than one character that are important or not stop-words.
    /// Order follows the text; duplicates are kept.
    pub fn content_tokens(&self, normalized: &str) -> Vec<String> {
        normalized
            .split_whitespace()
            .filter(|t| t.chars().count() > 1)
            .filter(|t| self.important_words.contains(*t) || !self.stop_words.contains(*t))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_important(&self, word: &str) -> bool {
        self.important_words.contains(word)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&Lexicon::default())
    }
}
