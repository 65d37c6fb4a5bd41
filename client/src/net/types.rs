//! Wire types shared by the chat widget and the relay endpoint.
//!
//! The server depends on this crate (`ssr` feature) and serializes the same
//! structs, so the browser and the relay cannot drift apart.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown when the model answered with no text.
pub const EMPTY_REPLY_FALLBACK: &str = "Connection weak.";

/// Shown when the relay or the model failed for any reason.
pub const FAILED_REPLY_FALLBACK: &str = "Signal lost in the void.";

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: Uuid,
    pub message: String,
}

/// Outcome of a single chat relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChatReply {
    /// The model produced text.
    Reply { text: String },
    /// The call succeeded but carried no text.
    Empty,
    /// Transport, service, or configuration failure.
    Failed,
}

impl ChatReply {
    /// Classify a successful response payload. Missing or empty text is `Empty`.
    #[must_use]
    pub fn from_text(text: Option<String>) -> Self {
        match text {
            Some(text) if !text.is_empty() => Self::Reply { text },
            _ => Self::Empty,
        }
    }

    /// Text to place in the transcript.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Reply { text } => text,
            Self::Empty => EMPTY_REPLY_FALLBACK,
            Self::Failed => FAILED_REPLY_FALLBACK,
        }
    }

    /// `true` when the transcript shows a fallback instead of model output.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Self::Reply { .. })
    }
}
