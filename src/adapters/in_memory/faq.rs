//! Mock FAQ store for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::ports::{FaqError, FaqStore};

/// Mock FAQ store with queued answers and call tracking.
///
/// Each `lookup` call consumes one queued outcome; with an empty queue it
/// finds no answer. For test code only.
#[derive(Debug, Default)]
pub struct MockFaqStore {
    outcomes: Mutex<VecDeque<Result<Option<String>, String>>>,
    calls: AtomicUsize,
}

impl MockFaqStore {
    /// Creates a mock with no stored answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an answer for the next lookup.
    pub fn push_answer(&self, answer: impl Into<String>) {
        self.outcomes
            .lock()
            .expect("MockFaqStore: outcomes lock poisoned")
            .push_back(Ok(Some(answer.into())));
    }

    /// Queues a miss for the next lookup.
    pub fn push_miss(&self) {
        self.outcomes
            .lock()
            .expect("MockFaqStore: outcomes lock poisoned")
            .push_back(Ok(None));
    }

    /// Queues a store failure.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.outcomes
            .lock()
            .expect("MockFaqStore: outcomes lock poisoned")
            .push_back(Err(message.into()));
    }

    /// Number of `lookup` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FaqStore for MockFaqStore {
    async fn lookup(&self, _utterance: &str) -> Result<Option<String>, FaqError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self
            .outcomes
            .lock()
            .expect("MockFaqStore: outcomes lock poisoned")
            .pop_front()
        {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(message)) => Err(FaqError::database(message)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_queue_misses() {
        let faq = MockFaqStore::new();
        assert_eq!(faq.lookup("anything").await.unwrap(), None);
        assert_eq!(faq.calls(), 1);
    }

    #[tokio::test]
    async fn queued_answer_is_returned_once() {
        let faq = MockFaqStore::new();
        faq.push_answer("We ship worldwide.");

        assert_eq!(
            faq.lookup("shipping").await.unwrap().as_deref(),
            Some("We ship worldwide.")
        );
        assert_eq!(faq.lookup("shipping").await.unwrap(), None);
    }
}
