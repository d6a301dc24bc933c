//! PostgreSQL implementation of the product catalog port.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::{FilterRecord, ProductRecord};
use crate::ports::{CatalogError, ProductCatalog};

/// Numeric view of the free-form price column: everything outside `[0-9.]`
/// stripped, empty results treated as NULL so they never match a bound.
const PRICE_AS_NUMERIC: &str =
    "CAST(NULLIF(regexp_replace(price, '[^0-9.]', '', 'g'), '') AS NUMERIC)";

/// PostgreSQL product catalog.
#[derive(Clone)]
pub struct PostgresProductCatalog {
    pool: PgPool,
}

impl PostgresProductCatalog {
    /// Creates a catalog over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for PostgresProductCatalog {
    /// Builds the predicate as a fold over the set filter fields and caps
    /// the result at 10 rows.
    async fn find_products(
        &self,
        filters: &FilterRecord,
    ) -> Result<Vec<ProductRecord>, CatalogError> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT name, brand, price, description, skin_type, hair_type, ingredients \
             FROM products WHERE 1=1",
        );

        if let Some(category) = filters.category {
            query.push(" AND category = ").push_bind(category.as_str());
        }
        if let Some(skin_type) = filters.skin_type {
            query.push(" AND skin_type = ").push_bind(skin_type.as_str());
        }
        if let Some(hair_type) = filters.hair_type {
            query.push(" AND hair_type = ").push_bind(hair_type.as_str());
        }
        if let Some(gender) = filters.gender {
            query
                .push(" AND (gender = ")
                .push_bind(gender.as_str())
                .push(" OR gender = 'unisex')");
        }
        if let Some(price_min) = filters.price_min {
            query
                .push(" AND ")
                .push(PRICE_AS_NUMERIC)
                .push(" >= ")
                .push_bind(price_min);
        }
        if let Some(price_max) = filters.price_max {
            query
                .push(" AND ")
                .push(PRICE_AS_NUMERIC)
                .push(" <= ")
                .push_bind(price_max);
        }
        query.push(" LIMIT 10");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::database(format!("Failed to query products: {}", e)))?;

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            products.push(ProductRecord {
                name: row
                    .try_get("name")
                    .map_err(|e| CatalogError::database(e.to_string()))?,
                brand: row
                    .try_get("brand")
                    .map_err(|e| CatalogError::database(e.to_string()))?,
                price: row
                    .try_get("price")
                    .map_err(|e| CatalogError::database(e.to_string()))?,
                description: row
                    .try_get("description")
                    .map_err(|e| CatalogError::database(e.to_string()))?,
                skin_type: row
                    .try_get("skin_type")
                    .map_err(|e| CatalogError::database(e.to_string()))?,
                hair_type: row
                    .try_get("hair_type")
                    .map_err(|e| CatalogError::database(e.to_string()))?,
                ingredients: row
                    .try_get("ingredients")
                    .map_err(|e| CatalogError::database(e.to_string()))?,
            });
        }

        Ok(products)
    }
}
