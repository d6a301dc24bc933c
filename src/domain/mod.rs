//! Domain layer: pure dialog logic, no I/O.

pub mod extractor;
pub mod filters;
pub mod intent;
pub mod lexicon;
pub mod mood;
pub mod product;

pub use extractor::{extract_filters, Tokenizer};
pub use filters::{Category, FilterRecord, Gender, HairType, SkinType};
pub use intent::{is_greeting, is_product_listing_request};
pub use mood::{Mood, MoodLabel};
pub use product::{FaqEntry, ProductRecord};
