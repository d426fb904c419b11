//! Word normalization shared by the ingest and query paths.
//!
//! Text is split on unicode word boundaries, stripped down to alphabetic
//! characters, and lowercased. Both sides of a lookup must normalize the same
//! way or queries would miss indexed words, so this is the only tokenizer in
//! the crate.

use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer producing lowercase alphabetic words.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Split `text` into normalized words.
    ///
    /// Non-alphabetic characters are dropped inside each segment; segments
    /// that end up empty (pure digits, punctuation) are skipped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter_map(|segment| self.normalize(segment))
            .collect()
    }

    /// Normalize one raw word, returning `None` if nothing alphabetic
    /// remains.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let word: String = raw
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        if word.is_empty() { None } else { Some(word) }
    }
}
