//! HTTP DTOs for the chat endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
///
/// Missing fields deserialize as empty strings; an empty `userInput` gets
/// the no-input reply rather than a client error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRequest {
    /// The user's utterance.
    pub user_input: String,
    /// Opaque caller-chosen session identifier.
    pub session_id: String,
}

/// Response body: always exactly one field.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    /// The assistant's reply.
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_deserializes_camel_case() {
        let request: ChatRequest =
            serde_json::from_value(json!({"userInput": "hello there", "sessionId": "a"})).unwrap();
        assert_eq!(request.user_input, "hello there");
        assert_eq!(request.session_id, "a");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let request: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.user_input, "");
        assert_eq!(request.session_id, "");

        let request: ChatRequest =
            serde_json::from_value(json!({"sessionId": "a"})).unwrap();
        assert_eq!(request.user_input, "");
    }

    #[test]
    fn reply_serializes_single_field() {
        let reply = ChatReply {
            reply: "Hello!".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"reply":"Hello!"}"#
        );
    }
}
