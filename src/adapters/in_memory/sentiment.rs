//! Mock sentiment probe for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{Mood, MoodLabel};
use crate::ports::{SentimentError, SentimentProbe};

/// Mock sentiment probe with a fixed label and error injection.
/// For test code only.
#[derive(Debug)]
pub struct MockSentimentProbe {
    label: Mutex<MoodLabel>,
    failures: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

impl Default for MockSentimentProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSentimentProbe {
    /// Creates a mock that classifies everything as neutral.
    pub fn new() -> Self {
        Self {
            label: Mutex::new(MoodLabel::Neutral),
            failures: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Sets the label returned by subsequent calls.
    pub fn set_label(&self, label: MoodLabel) {
        *self
            .label
            .lock()
            .expect("MockSentimentProbe: label lock poisoned") = label;
    }

    /// Queues an inference failure for the next call.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.failures
            .lock()
            .expect("MockSentimentProbe: failures lock poisoned")
            .push_back(message.into());
    }

    /// Number of `analyze` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentProbe for MockSentimentProbe {
    async fn analyze(&self, _utterance: &str) -> Result<Mood, SentimentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self
            .failures
            .lock()
            .expect("MockSentimentProbe: failures lock poisoned")
            .pop_front()
        {
            return Err(SentimentError::inference(message));
        }
        let label = *self
            .label
            .lock()
            .expect("MockSentimentProbe: label lock poisoned");
        Ok(Mood::new(label, 0.99))
    }
}
