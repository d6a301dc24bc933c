//! Catalog and FAQ records.

/// One product row as the catalog returns it.
///
/// `price` stays free-form text; numeric comparisons happen store-side
/// after stripping everything outside `[0-9.]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: String,
    pub brand: String,
    pub price: String,
    pub description: String,
    pub skin_type: Option<String>,
    pub hair_type: Option<String>,
    pub ingredients: Option<String>,
}

impl ProductRecord {
    /// Convenience constructor for the required fields.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            price: price.into(),
            description: description.into(),
            skin_type: None,
            hair_type: None,
            ingredients: None,
        }
    }

    /// Sets the skin type field.
    pub fn with_skin_type(mut self, skin_type: impl Into<String>) -> Self {
        self.skin_type = Some(skin_type.into());
        self
    }

    /// Sets the hair type field.
    pub fn with_hair_type(mut self, hair_type: impl Into<String>) -> Self {
        self.hair_type = Some(hair_type.into());
        self
    }

    /// Sets the ingredients field.
    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }
}

/// One question/answer row from the FAQ table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
