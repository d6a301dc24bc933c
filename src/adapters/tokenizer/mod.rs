//! Whitespace tokenizer.
//!
//! Splits on whitespace and trims punctuation from word edges, which is all
//! the filter grammar needs: its token checks are exact-match lookups for
//! single words like `male` or `serum`.

use crate::domain::Tokenizer;

/// Tokenizer that splits on whitespace and strips edge punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Creates the tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }
}
