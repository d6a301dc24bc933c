//! HTTP handlers for the chat endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use tracing::debug;

use crate::application::DialogOrchestrator;

use super::dto::{ChatReply, ChatRequest};

/// Shared application state for the chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub orchestrator: Arc<DialogOrchestrator>,
}

impl ChatAppState {
    /// Creates a new ChatAppState.
    pub fn new(orchestrator: Arc<DialogOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

/// POST /chat - Produce a reply for one utterance.
///
/// Always answers `200` with `{"reply": ...}`: an unreadable body is
/// treated as an empty request and internal failures come back as the
/// error sentinel, so clients never see a non-200 from this route.
pub async fn chat(
    State(state): State<ChatAppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatReply> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable chat request body");
            ChatRequest::default()
        }
    };

    let reply = state
        .orchestrator
        .respond(&request.user_input, &request.session_id)
        .await;

    Json(ChatReply { reply })
}
