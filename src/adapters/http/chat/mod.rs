//! HTTP adapter for the chat endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatReply, ChatRequest};
pub use handlers::{chat, ChatAppState};
pub use routes::{app_router, chat_routes};
