//! Chat relay endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::{ChatReply, ChatRequest};

use crate::services::chat::{self, ChatError};
use crate::state::AppState;

/// `POST /api/chat`: relay one message and return the classified outcome.
pub async fn relay(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> Result<Json<ChatReply>, StatusCode> {
    chat::handle_message(&state, body.session_id, &body.message)
        .await
        .map(Json)
        .map_err(chat_error_to_status)
}

pub(crate) fn chat_error_to_status(err: ChatError) -> StatusCode {
    match err {
        ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
        ChatError::SessionBusy(_) => StatusCode::CONFLICT,
        ChatError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;
