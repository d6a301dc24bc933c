//! Product Catalog Port - Interface for the product store.
//!
//! The orchestrator queries products through this port so it can be tested
//! against in-memory fakes. Implementations translate the typed filter
//! record into whatever predicate language the store speaks.

use async_trait::async_trait;

use crate::domain::{FilterRecord, ProductRecord};

/// Port for product catalog queries.
///
/// The result is capped at 10 rows by the store, in unspecified but stable
/// order. All set filter fields are AND-combined; unset fields contribute
/// no predicate.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Find products matching the filter record.
    async fn find_products(
        &self,
        filters: &FilterRecord,
    ) -> Result<Vec<ProductRecord>, CatalogError>;
}

/// Catalog store errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Query or connection failure in the underlying store.
    #[error("catalog query failed: {0}")]
    Database(String),
}

impl CatalogError {
    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}
