//! FAQ Store Port - Interface for the question/answer table.

use async_trait::async_trait;

/// Port for FAQ lookups.
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Look up an answer whose stored question contains the utterance.
    ///
    /// Returns the first match's answer, or `None` when nothing matches.
    async fn lookup(&self, utterance: &str) -> Result<Option<String>, FaqError>;
}

/// FAQ store errors.
#[derive(Debug, thiserror::Error)]
pub enum FaqError {
    /// Query or connection failure in the underlying store.
    #[error("faq lookup failed: {0}")]
    Database(String),
}

impl FaqError {
    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_error_displays_cause() {
        let err = FaqError::database("timeout");
        assert_eq!(err.to_string(), "faq lookup failed: timeout");
    }
}
