//! Filter extraction from natural language.
//!
//! Turns one utterance into a [`FilterRecord`] by scanning tokens and
//! substrings against the fixed vocabulary tables. Pure: same utterance,
//! same record.

use super::filters::{Category, FilterRecord, Gender, HairType, SkinType};

/// Splits text into a token sequence.
///
/// The extractor receives the tokenizer rather than owning one so tests can
/// substitute their own splitting rules.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Extracts a typed filter record from an utterance.
///
/// Matching rules, in order:
/// - gender: token-level with priority `male` > `female` > `unisex`
///   (the phrase `"all genders"` also selects unisex);
/// - skin type, hair type: substring scan over the lower-cased utterance,
///   first phrase in table order wins;
/// - category: first category in table order that appears among the tokens;
/// - price: whitespace-split words that are all digits after stripping one
///   leading `$` and ignoring dots; a word preceded by `under` sets the
///   upper bound, any other numeric word sets the lower bound, and later
///   matches overwrite earlier ones.
pub fn extract_filters(utterance: &str, tokenizer: &dyn Tokenizer) -> FilterRecord {
    let lowered = utterance.to_lowercase();
    let tokens = tokenizer.tokenize(&lowered);

    let mut record = FilterRecord::default();

    if tokens.iter().any(|t| t == "male") {
        record.gender = Some(Gender::Male);
    } else if tokens.iter().any(|t| t == "female") {
        record.gender = Some(Gender::Female);
    } else if tokens.iter().any(|t| t == "unisex") || lowered.contains("all genders") {
        record.gender = Some(Gender::Unisex);
    }

    record.skin_type = SkinType::ALL
        .iter()
        .copied()
        .find(|skin| lowered.contains(skin.as_str()));

    record.hair_type = HairType::ALL
        .iter()
        .copied()
        .find(|hair| lowered.contains(hair.as_str()));

    record.category = Category::ALL
        .iter()
        .copied()
        .find(|category| tokens.iter().any(|t| t == category.as_str()));

    // Price words are scanned on the original utterance, not the token
    // sequence, so the `under` lookbehind sees exactly what the user typed.
    let words: Vec<&str> = utterance.split_whitespace().collect();
    for (i, word) in words.iter().enumerate() {
        let Some(price) = parse_price_word(word) else {
            continue;
        };
        if i > 0 && words[i - 1] == "under" {
            record.price_max = Some(price);
        } else {
            record.price_min = Some(price);
        }
    }

    record
}

/// Accepts a word as a price if, after stripping one leading `$`, the
/// remainder with dots removed is all ASCII digits.
fn parse_price_word(word: &str) -> Option<f64> {
    let stripped = word.strip_prefix('$').unwrap_or(word);
    if stripped.is_empty() {
        return None;
    }
    let mut saw_digit = false;
    for c in stripped.chars() {
        match c {
            '0'..='9' => saw_digit = true,
            '.' => {}
            _ => return None,
        }
    }
    if !saw_digit {
        return None;
    }
    stripped.parse().ok()
}
