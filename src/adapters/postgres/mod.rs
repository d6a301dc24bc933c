//! PostgreSQL adapters for the catalog and FAQ ports.

mod catalog;
mod faq;

pub use catalog::PostgresProductCatalog;
pub use faq::PostgresFaqStore;
