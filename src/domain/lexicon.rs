//! Static vocabulary tables.
//!
//! Fixed word and phrase lists that drive intent classification and filter
//! extraction. Order matters for the tables scanned with first-match
//! semantics.

/// Greeting phrases, matched as substrings of the lower-cased utterance.
pub const GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "howdy",
];

/// Phrases that signal a product-listing request.
pub const LISTING_TRIGGERS: &[&str] = &[
    "products",
    "available products",
    "give products",
    "what products",
    "show me products",
];

/// Skin type phrases, scanned in order; the first substring hit wins.
pub const SKIN_TYPE_PHRASES: &[&str] =
    &["dry skin", "oily skin", "sensitive skin", "normal skin"];

/// Hair type phrases, scanned in order; the first substring hit wins.
pub const HAIR_TYPE_PHRASES: &[&str] = &[
    "dry hair",
    "oily hair",
    "curly hair",
    "straight hair",
    "frizzy hair",
    "normal hair",
];

/// Product category labels, scanned in order; the first category that
/// appears among the utterance tokens wins.
pub const CATEGORIES: &[&str] = &[
    "soap",
    "cleanser",
    "shower gel",
    "cream",
    "perfume",
    "lipstick",
    "body lotion",
    "haircare",
    "mascara",
    "blush",
    "serum",
    "face oil",
    "contour",
    "bb cream",
    "exfoliator",
    "eyeliner",
    "concealer",
    "cc cream",
    "face mask",
    "bronzer",
    "primer",
    "makeup remover",
    "powder",
    "eye shadow",
    "lip liner",
    "foundation",
    "setting spray",
    "deodorant",
    "body wash",
];
