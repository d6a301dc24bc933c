//! Sentiment Probe Port - Interface for the sentiment model.

use async_trait::async_trait;

use crate::domain::Mood;

/// Port for sentiment analysis.
///
/// The orchestrator uses the returned mood only to derive an empathic
/// preamble; a probe failure is treated as an unexpected pipeline failure.
#[async_trait]
pub trait SentimentProbe: Send + Sync {
    /// Classify the mood of an utterance.
    async fn analyze(&self, utterance: &str) -> Result<Mood, SentimentError>;
}

/// Sentiment model errors.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    /// The model failed to produce a classification.
    #[error("sentiment inference failed: {0}")]
    Inference(String),
}

impl SentimentError {
    /// Creates an inference error.
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference(message.into())
    }
}
