//! Mock text generator for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::ports::{GenerationError, TextGenerator};

/// Fallback text when the mock's queue is empty.
pub const DEFAULT_MOCK_REPLY: &str = "mock reply";

/// Mock generator with queued outcomes, error injection, and call
/// tracking. For test code only.
#[derive(Debug, Default)]
pub struct MockGenerator {
    outcomes: Mutex<VecDeque<Result<String, GenerationError>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Creates a mock that answers [`DEFAULT_MOCK_REPLY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues generated text for the next call.
    pub fn push_text(&self, text: impl Into<String>) {
        self.outcomes
            .lock()
            .expect("MockGenerator: outcomes lock poisoned")
            .push_back(Ok(text.into()));
    }

    /// Queues a generation failure for the next call.
    pub fn push_error(&self, error: GenerationError) {
        self.outcomes
            .lock()
            .expect("MockGenerator: outcomes lock poisoned")
            .push_back(Err(error));
    }

    /// Number of `generate` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .expect("MockGenerator: prompts lock poisoned")
            .clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .expect("MockGenerator: prompts lock poisoned")
            .push(prompt.to_string());

        match self
            .outcomes
            .lock()
            .expect("MockGenerator: outcomes lock poisoned")
            .pop_front()
        {
            Some(outcome) => outcome,
            None => Ok(DEFAULT_MOCK_REPLY.to_string()),
        }
    }
}
