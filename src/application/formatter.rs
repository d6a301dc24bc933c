//! Response formatting for catalog results.
//!
//! Renders a product list into the user-visible multi-line reply. The
//! layout is part of the client contract: header, numbered blocks, a rule
//! of 40 dashes between blocks.

use crate::domain::ProductRecord;

/// Reply when the catalog matched nothing.
pub const NO_MATCH_REPLY: &str = "Sorry, I couldn't find any products that match your query.";

/// At most this many products appear in one reply.
const MAX_LISTED: usize = 10;

/// Renders products into the listing reply.
///
/// `query_type` is the resolved category label, or `"products"` when the
/// query had none. The `Skin Type` line appears only for `"cream"` queries
/// and the `Hair Type` line only for `"shampoo"` queries, and only when the
/// row carries the field.
pub fn format_products(products: &[ProductRecord], query_type: &str) -> String {
    if products.is_empty() {
        return NO_MATCH_REPLY.to_string();
    }

    let shown = &products[..products.len().min(MAX_LISTED)];
    let mut reply = format!("Here are the top {} {}:\n", shown.len(), query_type);

    for (idx, product) in shown.iter().enumerate() {
        reply.push_str(&format!(
            "\n{}. **{}** by {}\n",
            idx + 1,
            product.name,
            product.brand
        ));
        reply.push_str(&format!("   Price: ${}\n", product.price));
        reply.push_str(&format!("   Description: {}\n", product.description));
        if query_type == "cream" {
            if let Some(skin) = &product.skin_type {
                reply.push_str(&format!("   Skin Type: {}\n", skin));
            }
        }
        if query_type == "shampoo" {
            if let Some(hair) = &product.hair_type {
                reply.push_str(&format!("   Hair Type: {}\n", hair));
            }
        }
        reply.push_str(&"-".repeat(40));
    }

    reply
}
