//! Typed filter record extracted from a product query.
//!
//! Every field is optional; an unset field contributes no predicate when the
//! catalog is queried. The string forms returned by `as_str` are the exact
//! values the catalog rows store, so they can be bound directly into SQL.

/// Structured extraction of a product query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterRecord {
    pub gender: Option<Gender>,
    pub skin_type: Option<SkinType>,
    pub hair_type: Option<HairType>,
    pub category: Option<Category>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterRecord {
    /// The label used to parameterize response formatting: the resolved
    /// category, or `"products"` when no category is set.
    pub fn query_type(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("products")
    }
}

/// Target gender for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unisex => "unisex",
        }
    }
}

/// Skin type a product is formulated for. Stored in rows as the full
/// phrase, e.g. `"dry skin"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinType {
    Dry,
    Oily,
    Sensitive,
    Normal,
}

impl SkinType {
    /// In the same order as [`crate::domain::lexicon::SKIN_TYPE_PHRASES`].
    pub const ALL: &'static [SkinType] = &[
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Sensitive,
        SkinType::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "dry skin",
            SkinType::Oily => "oily skin",
            SkinType::Sensitive => "sensitive skin",
            SkinType::Normal => "normal skin",
        }
    }
}

/// Hair type a product is formulated for. Stored in rows as the full
/// phrase, e.g. `"curly hair"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HairType {
    Dry,
    Oily,
    Curly,
    Straight,
    Frizzy,
    Normal,
}

impl HairType {
    /// In the same order as [`crate::domain::lexicon::HAIR_TYPE_PHRASES`].
    pub const ALL: &'static [HairType] = &[
        HairType::Dry,
        HairType::Oily,
        HairType::Curly,
        HairType::Straight,
        HairType::Frizzy,
        HairType::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HairType::Dry => "dry hair",
            HairType::Oily => "oily hair",
            HairType::Curly => "curly hair",
            HairType::Straight => "straight hair",
            HairType::Frizzy => "frizzy hair",
            HairType::Normal => "normal hair",
        }
    }
}

/// Product category. The variant order mirrors
/// [`crate::domain::lexicon::CATEGORIES`], which decides ties when an
/// utterance mentions several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Soap,
    Cleanser,
    ShowerGel,
    Cream,
    Perfume,
    Lipstick,
    BodyLotion,
    Haircare,
    Mascara,
    Blush,
    Serum,
    FaceOil,
    Contour,
    BbCream,
    Exfoliator,
    Eyeliner,
    Concealer,
    CcCream,
    FaceMask,
    Bronzer,
    Primer,
    MakeupRemover,
    Powder,
    EyeShadow,
    LipLiner,
    Foundation,
    SettingSpray,
    Deodorant,
    BodyWash,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Soap,
        Category::Cleanser,
        Category::ShowerGel,
        Category::Cream,
        Category::Perfume,
        Category::Lipstick,
        Category::BodyLotion,
        Category::Haircare,
        Category::Mascara,
        Category::Blush,
        Category::Serum,
        Category::FaceOil,
        Category::Contour,
        Category::BbCream,
        Category::Exfoliator,
        Category::Eyeliner,
        Category::Concealer,
        Category::CcCream,
        Category::FaceMask,
        Category::Bronzer,
        Category::Primer,
        Category::MakeupRemover,
        Category::Powder,
        Category::EyeShadow,
        Category::LipLiner,
        Category::Foundation,
        Category::SettingSpray,
        Category::Deodorant,
        Category::BodyWash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Soap => "soap",
            Category::Cleanser => "cleanser",
            Category::ShowerGel => "shower gel",
            Category::Cream => "cream",
            Category::Perfume => "perfume",
            Category::Lipstick => "lipstick",
            Category::BodyLotion => "body lotion",
            Category::Haircare => "haircare",
            Category::Mascara => "mascara",
            Category::Blush => "blush",
            Category::Serum => "serum",
            Category::FaceOil => "face oil",
            Category::Contour => "contour",
            Category::BbCream => "bb cream",
            Category::Exfoliator => "exfoliator",
            Category::Eyeliner => "eyeliner",
            Category::Concealer => "concealer",
            Category::CcCream => "cc cream",
            Category::FaceMask => "face mask",
            Category::Bronzer => "bronzer",
            Category::Primer => "primer",
            Category::MakeupRemover => "makeup remover",
            Category::Powder => "powder",
            Category::EyeShadow => "eye shadow",
            Category::LipLiner => "lip liner",
            Category::Foundation => "foundation",
            Category::SettingSpray => "setting spray",
            Category::Deodorant => "deodorant",
            Category::BodyWash => "body wash",
        }
    }
}
