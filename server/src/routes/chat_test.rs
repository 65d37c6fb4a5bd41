use super::*;
use std::sync::Arc;

use uuid::Uuid;

use crate::llm::LlmChat;
use crate::llm::types::{ChatResponse, LlmError, Message};
use crate::rate_limit::{RateLimitConfig, RateLimitError};
use crate::services::chat::SessionLimits;
use crate::state::test_helpers;

struct FixedLlm(&'static str);

#[async_trait::async_trait]
impl LlmChat for FixedLlm {
    async fn chat(&self, _system: &str, _messages: &[Message]) -> Result<ChatResponse, LlmError> {
        Ok(ChatResponse {
            text: Some(self.0.to_string()),
            model: "mock".into(),
            finish_reason: None,
            input_tokens: 0,
            output_tokens: 0,
        })
    }
}

fn request(message: &str) -> Json<ChatRequest> {
    Json(ChatRequest { session_id: Uuid::new_v4(), message: message.into() })
}

// =============================================================================
// chat_error_to_status
// =============================================================================

#[test]
fn empty_message_is_bad_request() {
    assert_eq!(chat_error_to_status(ChatError::EmptyMessage), StatusCode::BAD_REQUEST);
}

#[test]
fn busy_session_is_conflict() {
    assert_eq!(chat_error_to_status(ChatError::SessionBusy(Uuid::new_v4())), StatusCode::CONFLICT);
}

#[test]
fn rate_limited_is_too_many_requests() {
    let err = ChatError::RateLimited(RateLimitError::GlobalExceeded { limit: 30, window_secs: 60 });
    assert_eq!(chat_error_to_status(err), StatusCode::TOO_MANY_REQUESTS);
}

// =============================================================================
// relay
// =============================================================================

#[tokio::test]
async fn relay_returns_model_text() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(FixedLlm("Void Hoodie ⬖")));

    let Json(reply) = relay(State(state), request("late studio session")).await.unwrap();

    assert_eq!(reply, ChatReply::Reply { text: "Void Hoodie ⬖".into() });
}

#[tokio::test]
async fn relay_blank_message_is_400() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(FixedLlm("unused")));

    let status = relay(State(state), request("  ")).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn relay_without_llm_is_failed_outcome() {
    let state = test_helpers::test_app_state();

    let Json(reply) = relay(State(state), request("hello")).await.unwrap();

    assert_eq!(reply, ChatReply::Failed);
}

#[tokio::test]
async fn relay_over_session_limit_is_429() {
    let rate = RateLimitConfig { per_session_limit: 1, ..RateLimitConfig::default() };
    let state = test_helpers::test_app_state_with_limits(
        Some(Arc::new(FixedLlm("Ghost Shell ◈"))),
        rate,
        SessionLimits::default(),
    );
    let session_id = Uuid::new_v4();
    let same_session = || Json(ChatRequest { session_id, message: "again".into() });

    relay(State(state.clone()), same_session()).await.unwrap();
    let status = relay(State(state), same_session()).await.unwrap_err();

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}
