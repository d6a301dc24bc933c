//! Ports: capability interfaces over external collaborators.
//!
//! Each external system the dialog pipeline touches (product store, FAQ
//! table, generation API, sentiment model) is reached through exactly one
//! trait here, so the orchestrator can be exercised against in-memory
//! fakes.

mod catalog;
mod faq;
mod generator;
mod sentiment;

pub use catalog::{CatalogError, ProductCatalog};
pub use faq::{FaqError, FaqStore};
pub use generator::{GenerationError, TextGenerator};
pub use sentiment::{SentimentError, SentimentProbe};
