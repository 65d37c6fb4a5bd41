//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional LLM client, the in-memory chat session registry and the
//! relay rate limiter. Nothing here is persisted; a restart forgets every
//! conversation.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::rate_limit::RateLimiter;
use crate::services::chat::ChatSessions;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if the API key is not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub chat_sessions: ChatSessions,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm, chat_sessions: ChatSessions::new(), rate_limiter: RateLimiter::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
