//! Text Generator Port - Interface for the LLM generation API.
//!
//! Failures are values here: the orchestrator translates each variant into
//! the fixed user-visible sentinel string at the reply boundary, so no
//! generation failure ever escapes as an error.

use async_trait::async_trait;

/// Port for LLM text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for the prompt.
    ///
    /// The prompt is the raw utterance; no history or system framing is
    /// added at this layer.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Generation failures, kept structured until the reply boundary.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The API answered but returned no candidates.
    #[error("generation returned no candidates")]
    NoCandidates,

    /// Transport-level failure (connection, timeout, non-success status).
    #[error("generation transport failed: {0}")]
    Transport(String),

    /// The API answered with a body we could not interpret.
    #[error("generation response unreadable: {0}")]
    Parse(String),
}

impl GenerationError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
