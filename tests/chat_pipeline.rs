//! Integration tests for the chat pipeline.
//!
//! These tests wire the dialog orchestrator against in-memory adapters and
//! verify the literal reply contract end to end:
//! 1. Fixed sentinel replies for empty input, greetings, and failures
//! 2. Source precedence: catalog, then FAQ, then generation
//! 3. The formatted product listing layout

use std::sync::Arc;

use glow_advisor::adapters::http::chat::{ChatReply, ChatRequest};
use glow_advisor::adapters::in_memory::{
    MockFaqStore, MockGenerator, MockProductCatalog, MockSentimentProbe,
};
use glow_advisor::adapters::tokenizer::WhitespaceTokenizer;
use glow_advisor::application::{
    DialogOrchestrator, EMPTY_INPUT_REPLY, ERROR_REPLY, GREETING_REPLY,
};
use glow_advisor::domain::ProductRecord;
use glow_advisor::ports::{
    FaqStore, GenerationError, ProductCatalog, SentimentProbe, TextGenerator,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Pipeline {
    catalog: Arc<MockProductCatalog>,
    faq: Arc<MockFaqStore>,
    generator: Arc<MockGenerator>,
    sentiment: Arc<MockSentimentProbe>,
    orchestrator: DialogOrchestrator,
}

impl Pipeline {
    fn new() -> Self {
        let catalog = Arc::new(MockProductCatalog::new());
        let faq = Arc::new(MockFaqStore::new());
        let generator = Arc::new(MockGenerator::new());
        let sentiment = Arc::new(MockSentimentProbe::new());

        let orchestrator = DialogOrchestrator::new(
            Arc::clone(&catalog) as Arc<dyn ProductCatalog>,
            Arc::clone(&faq) as Arc<dyn FaqStore>,
            Arc::clone(&generator) as Arc<dyn TextGenerator>,
            Arc::clone(&sentiment) as Arc<dyn SentimentProbe>,
            Arc::new(WhitespaceTokenizer::new()),
        );

        Self {
            catalog,
            faq,
            generator,
            sentiment,
            orchestrator,
        }
    }

    async fn respond(&self, utterance: &str, session_id: &str) -> String {
        self.orchestrator.respond(utterance, session_id).await
    }
}

fn dry_skin_cream(name: &str, price: &str, description: &str) -> ProductRecord {
    ProductRecord::new(name, "Dewlab", price, description).with_skin_type("dry skin")
}

// =============================================================================
// Literal reply scenarios
// =============================================================================

#[tokio::test]
async fn greeting_gets_the_fixed_greeting_reply() {
    let pipeline = Pipeline::new();

    let reply = pipeline.respond("hello there", "a").await;

    assert_eq!(reply, "Hello! How can I assist you today? 😊");
    assert_eq!(reply, GREETING_REPLY);
}

#[tokio::test]
async fn empty_input_gets_the_no_input_reply() {
    let pipeline = Pipeline::new();

    let reply = pipeline.respond("", "a").await;

    assert_eq!(reply, "No input received. Please type something.");
    assert_eq!(reply, EMPTY_INPUT_REPLY);
}

#[tokio::test]
async fn listing_request_renders_the_catalog_rows() {
    let pipeline = Pipeline::new();
    pipeline.catalog.push_products(vec![
        dry_skin_cream("Aqua Cream", "18.99", "Day moisturizer"),
        dry_skin_cream("Night Cream", "15.49", "Night moisturizer"),
    ]);

    let reply = pipeline
        .respond("show me products cream for dry skin under 20", "b")
        .await;

    let rule = "-".repeat(40);
    let expected = format!(
        "Here are the top 2 cream:\n\
         \n\
         1. **Aqua Cream** by Dewlab\n   \
         Price: $18.99\n   \
         Description: Day moisturizer\n   \
         Skin Type: dry skin\n\
         {rule}\n\
         2. **Night Cream** by Dewlab\n   \
         Price: $15.49\n   \
         Description: Night moisturizer\n   \
         Skin Type: dry skin\n\
         {rule}"
    );
    assert_eq!(reply, expected);

    // The catalog saw the extracted filter record.
    let filters = pipeline.catalog.last_filters().unwrap();
    assert_eq!(filters.query_type(), "cream");
    assert_eq!(filters.price_max, Some(20.0));
}

#[tokio::test]
async fn faq_answer_is_returned_verbatim() {
    let pipeline = Pipeline::new();
    pipeline
        .faq
        .push_answer("You can return any unopened product within 30 days.");

    let reply = pipeline.respond("what is your return policy", "c").await;

    assert_eq!(reply, "You can return any unopened product within 30 days.");
    assert_eq!(pipeline.generator.calls(), 0);
}

#[tokio::test]
async fn generation_text_is_returned_when_faq_is_empty() {
    let pipeline = Pipeline::new();
    pipeline
        .generator
        .push_text("Why did the mascara miss the party? It was waterproof.");

    let reply = pipeline.respond("tell me a joke", "d").await;

    assert_eq!(
        reply,
        "Why did the mascara miss the party? It was waterproof."
    );
    assert_eq!(pipeline.faq.calls(), 1);
}

#[tokio::test]
async fn generation_transport_failure_gets_the_error_reply() {
    let pipeline = Pipeline::new();
    pipeline
        .generator
        .push_error(GenerationError::transport("connection reset by peer"));

    let reply = pipeline.respond("tell me a joke", "d").await;

    assert_eq!(reply, "An error occurred while processing your request.");
    assert_eq!(reply, ERROR_REPLY);
}

// =============================================================================
// Pipeline invariants
// =============================================================================

#[tokio::test]
async fn every_reply_is_a_non_empty_string() {
    let pipeline = Pipeline::new();
    pipeline.catalog.fail_next("db down");
    pipeline.faq.fail_next("db down");
    pipeline.sentiment.fail_next("model gone");

    let utterances = [
        "",
        "hello",
        "show me products",
        "what is your return policy",
        "tell me a joke",
    ];
    for utterance in utterances {
        let reply = pipeline.respond(utterance, "s").await;
        assert!(!reply.is_empty(), "empty reply for {utterance:?}");
    }
}

#[tokio::test]
async fn listing_never_renders_more_than_ten_products() {
    let pipeline = Pipeline::new();
    let products: Vec<ProductRecord> = (0..15)
        .map(|i| dry_skin_cream(&format!("Cream {i}"), "9.99", "Moisturizer"))
        .collect();
    pipeline.catalog.push_products(products);

    let reply = pipeline.respond("show me products cream", "b").await;

    assert!(reply.starts_with("Here are the top 10 cream:"));
    assert!(!reply.contains("\n11. "));
    assert_eq!(reply.matches(&"-".repeat(40)).count(), 10);
}

#[tokio::test]
async fn catalog_hit_short_circuits_faq_and_generation() {
    let pipeline = Pipeline::new();
    pipeline
        .catalog
        .push_products(vec![dry_skin_cream("Aqua Cream", "18.99", "Moisturizer")]);
    pipeline.faq.push_answer("unused");
    pipeline.generator.push_text("unused");

    pipeline.respond("show me products cream", "b").await;

    assert_eq!(pipeline.faq.calls(), 0);
    assert_eq!(pipeline.generator.calls(), 0);
}

#[tokio::test]
async fn session_contexts_are_created_once_and_reused() {
    let pipeline = Pipeline::new();

    pipeline.respond("tell me a joke", "returning").await;
    pipeline.respond("another joke please", "returning").await;
    pipeline.respond("hello", "fresh").await;

    let sessions = pipeline.orchestrator.sessions();
    assert_eq!(sessions.len(), 2);
    assert!(sessions.contains("returning"));
    assert!(sessions.contains("fresh"));
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn literal_request_bodies_deserialize() {
    let request: ChatRequest =
        serde_json::from_str(r#"{"userInput":"hello there","sessionId":"a"}"#).unwrap();
    assert_eq!(request.user_input, "hello there");
    assert_eq!(request.session_id, "a");

    let request: ChatRequest =
        serde_json::from_str(r#"{"userInput":"","sessionId":"a"}"#).unwrap();
    assert_eq!(request.user_input, "");
}

#[test]
fn reply_json_has_exactly_one_field() {
    let reply = ChatReply {
        reply: GREETING_REPLY.to_string(),
    };
    let value = serde_json::to_value(&reply).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["reply"], GREETING_REPLY);
}
