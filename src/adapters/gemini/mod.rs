//! Gemini adapter for the text generation port.

mod provider;

pub use provider::{GeminiConfig, GeminiGenerator};
