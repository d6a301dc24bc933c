//! Application layer: the dialog pipeline and its supporting services.

pub mod formatter;
pub mod orchestrator;
pub mod session;

pub use formatter::{format_products, NO_MATCH_REPLY};
pub use orchestrator::{
    DialogOrchestrator, EMPTY_INPUT_REPLY, ERROR_REPLY, GREETING_REPLY, NO_CANDIDATES_REPLY,
    REPHRASE_REPLY,
};
pub use session::{SessionContext, SessionStore};
