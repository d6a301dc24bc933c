//! Dialog Orchestrator - one utterance in, one reply out.
//!
//! Composes the intent predicates, the filter extractor, and the ranked
//! answer sources (catalog, FAQ, LLM fallback) with a first-successful-
//! answer policy. Adapter failures never escape: each is logged and folded
//! into a neutral outcome or a fixed sentinel reply, so every request ends
//! in a human-readable string.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{
    extract_filters, is_greeting, is_product_listing_request, Tokenizer,
};
use crate::ports::{
    FaqStore, GenerationError, ProductCatalog, SentimentError, SentimentProbe, TextGenerator,
};

use super::formatter::format_products;
use super::session::SessionStore;

/// Reply for an empty or missing utterance.
pub const EMPTY_INPUT_REPLY: &str = "No input received. Please type something.";

/// Reply for a greeting.
pub const GREETING_REPLY: &str = "Hello! How can I assist you today? 😊";

/// Reply when the generation API answers with no candidates.
pub const NO_CANDIDATES_REPLY: &str = "No response from Gemini API.";

/// Reply when generation yields empty text.
pub const REPHRASE_REPLY: &str =
    "I'm sorry, I couldn't find any relevant information. Could you try rephrasing your query?";

/// Reply for any failure the pipeline cannot absorb.
pub const ERROR_REPLY: &str = "An error occurred while processing your request.";

/// The dialog pipeline.
///
/// Holds one handle per answer source plus the session store. Cheap to
/// share behind an `Arc`; each request runs the cascade independently.
pub struct DialogOrchestrator {
    catalog: Arc<dyn ProductCatalog>,
    faq: Arc<dyn FaqStore>,
    generator: Arc<dyn TextGenerator>,
    sentiment: Arc<dyn SentimentProbe>,
    tokenizer: Arc<dyn Tokenizer>,
    sessions: SessionStore,
    prepend_empathy: bool,
}

impl DialogOrchestrator {
    /// Creates an orchestrator over the given answer sources.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        faq: Arc<dyn FaqStore>,
        generator: Arc<dyn TextGenerator>,
        sentiment: Arc<dyn SentimentProbe>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            catalog,
            faq,
            generator,
            sentiment,
            tokenizer,
            sessions: SessionStore::new(),
            prepend_empathy: false,
        }
    }

    /// Controls whether the empathy preamble is prepended to replies.
    ///
    /// The preamble is derived from the sentiment probe on every
    /// non-greeting turn regardless; off (the default) keeps it a no-op.
    pub fn with_prepend_empathy(mut self, prepend: bool) -> Self {
        self.prepend_empathy = prepend;
        self
    }

    /// The session store (exposed for tests and diagnostics).
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Produces the reply for one utterance.
    ///
    /// Never fails: unexpected pipeline errors are logged and reported as
    /// [`ERROR_REPLY`].
    pub async fn respond(&self, utterance: &str, session_id: &str) -> String {
        if utterance.is_empty() {
            return EMPTY_INPUT_REPLY.to_string();
        }

        match self.dispatch(utterance, session_id).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(error = %err, "dialog pipeline failed");
                ERROR_REPLY.to_string()
            }
        }
    }

    /// Runs the cascade: greeting, sentiment, catalog, FAQ, LLM.
    async fn dispatch(&self, utterance: &str, session_id: &str) -> Result<String, SentimentError> {
        self.sessions.ensure(session_id);

        if is_greeting(utterance) {
            debug!(session_id, "greeting");
            return Ok(GREETING_REPLY.to_string());
        }

        let mood = self.sentiment.analyze(utterance).await?;
        let preamble = mood.label.empathy_preamble();
        debug!(session_id, mood = ?mood.label, "classified utterance");

        let mut reply = None;

        if is_product_listing_request(utterance) {
            let filters = extract_filters(utterance, self.tokenizer.as_ref());
            debug!(session_id, ?filters, "listing intent");

            let products = match self.catalog.find_products(&filters).await {
                Ok(products) => products,
                Err(err) => {
                    error!(error = %err, "catalog query failed");
                    Vec::new()
                }
            };
            if !products.is_empty() {
                reply = Some(format_products(&products, filters.query_type()));
            }
        }

        if reply.is_none() {
            reply = match self.faq.lookup(utterance).await {
                Ok(answer) => answer,
                Err(err) => {
                    error!(error = %err, "faq lookup failed");
                    None
                }
            };
        }

        let body = match reply {
            Some(reply) => reply,
            None => match self.generator.generate(utterance).await {
                Ok(text) if text.is_empty() => REPHRASE_REPLY.to_string(),
                Ok(text) => text,
                Err(GenerationError::NoCandidates) => NO_CANDIDATES_REPLY.to_string(),
                Err(err) => {
                    error!(error = %err, "generation failed");
                    ERROR_REPLY.to_string()
                }
            },
        };

        if self.prepend_empathy {
            Ok(format!("{preamble}\n\n{body}"))
        } else {
            Ok(body)
        }
    }
}
