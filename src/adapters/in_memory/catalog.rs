//! Mock product catalog for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{FilterRecord, ProductRecord};
use crate::ports::{CatalogError, ProductCatalog};

/// Mock catalog with queued results and call tracking.
///
/// Each `find_products` call consumes one queued outcome; with an empty
/// queue it returns an empty list. For test code only: lock operations
/// panic if poisoned.
#[derive(Debug, Default)]
pub struct MockProductCatalog {
    outcomes: Mutex<VecDeque<Result<Vec<ProductRecord>, String>>>,
    calls: AtomicUsize,
    last_filters: Mutex<Option<FilterRecord>>,
}

impl MockProductCatalog {
    /// Creates a mock that always finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful result.
    pub fn push_products(&self, products: Vec<ProductRecord>) {
        self.outcomes
            .lock()
            .expect("MockProductCatalog: outcomes lock poisoned")
            .push_back(Ok(products));
    }

    /// Queues a store failure.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.outcomes
            .lock()
            .expect("MockProductCatalog: outcomes lock poisoned")
            .push_back(Err(message.into()));
    }

    /// Number of `find_products` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The filter record of the most recent call.
    pub fn last_filters(&self) -> Option<FilterRecord> {
        self.last_filters
            .lock()
            .expect("MockProductCatalog: filters lock poisoned")
            .clone()
    }
}

#[async_trait]
impl ProductCatalog for MockProductCatalog {
    async fn find_products(
        &self,
        filters: &FilterRecord,
    ) -> Result<Vec<ProductRecord>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_filters
            .lock()
            .expect("MockProductCatalog: filters lock poisoned") = Some(filters.clone());

        match self
            .outcomes
            .lock()
            .expect("MockProductCatalog: outcomes lock poisoned")
            .pop_front()
        {
            Some(Ok(products)) => Ok(products),
            Some(Err(message)) => Err(CatalogError::database(message)),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_queue_returns_no_products() {
        let catalog = MockProductCatalog::new();
        let products = catalog.find_products(&FilterRecord::default()).await.unwrap();
        assert!(products.is_empty());
        assert_eq!(catalog.calls(), 1);
    }

    #[tokio::test]
    async fn queued_outcomes_are_consumed_in_order() {
        let catalog = MockProductCatalog::new();
        catalog.push_products(vec![ProductRecord::new("A", "B", "1", "d")]);
        catalog.fail_next("down");

        assert_eq!(
            catalog
                .find_products(&FilterRecord::default())
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(catalog.find_products(&FilterRecord::default()).await.is_err());
    }

    #[tokio::test]
    async fn records_last_filters() {
        let catalog = MockProductCatalog::new();
        let filters = FilterRecord {
            price_max: Some(20.0),
            ..Default::default()
        };
        catalog.find_products(&filters).await.unwrap();
        assert_eq!(catalog.last_filters(), Some(filters));
    }
}
