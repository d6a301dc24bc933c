//! Axum routes for the chat endpoint.

use std::time::Duration;

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{chat, ChatAppState};

/// Creates routes for the chat endpoint.
///
/// REST Endpoints:
/// - POST /chat - Produce a reply for one utterance
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new().route("/chat", post(chat))
}

/// Complete application router: chat routes plus permissive CORS, request
/// tracing, and a request timeout.
pub fn app_router(state: ChatAppState, request_timeout: Duration) -> Router {
    chat_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_routes_creates_valid_router() {
        let _routes = chat_routes();
    }
}
