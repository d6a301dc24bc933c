//! PostgreSQL implementation of the FAQ store port.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::ports::{FaqError, FaqStore};

/// PostgreSQL FAQ store.
///
/// Retrieval is by substring containment of the utterance in the stored
/// question, first row wins.
#[derive(Clone)]
pub struct PostgresFaqStore {
    pool: PgPool,
}

impl PostgresFaqStore {
    /// Creates an FAQ store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqStore for PostgresFaqStore {
    async fn lookup(&self, utterance: &str) -> Result<Option<String>, FaqError> {
        let row = sqlx::query("SELECT answer FROM faq WHERE question LIKE $1 LIMIT 1")
            .bind(format!("%{}%", utterance))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| FaqError::database(format!("Failed to query faq: {}", e)))?;

        match row {
            Some(row) => {
                let answer = row
                    .try_get("answer")
                    .map_err(|e| FaqError::database(e.to_string()))?;
                Ok(Some(answer))
            }
            None => Ok(None),
        }
    }
}
