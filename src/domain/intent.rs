//! Intent predicates.
//!
//! Cheap substring checks that decide which branch of the dialog pipeline
//! handles an utterance. Both predicates are pure and total.

use super::lexicon::{GREETINGS, LISTING_TRIGGERS};

/// True iff the utterance contains any greeting phrase.
pub fn is_greeting(utterance: &str) -> bool {
    let lowered = utterance.to_lowercase();
    GREETINGS.iter().any(|greeting| lowered.contains(greeting))
}

/// True iff the utterance contains any product-listing trigger phrase.
pub fn is_product_listing_request(utterance: &str) -> bool {
    let lowered = utterance.to_lowercase();
    LISTING_TRIGGERS
        .iter()
        .any(|trigger| lowered.contains(trigger))
}
