//! In-memory mock adapters for testing.
//!
//! Configurable fakes for every port: queued outcomes, error injection,
//! call tracking. These adapters are for **testing only**; lock operations
//! `expect()` and will panic if poisoned.

mod catalog;
mod faq;
mod generator;
mod sentiment;

pub use catalog::MockProductCatalog;
pub use faq::MockFaqStore;
pub use generator::{MockGenerator, DEFAULT_MOCK_REPLY};
pub use sentiment::MockSentimentProbe;
