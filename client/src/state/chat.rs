//! Chat widget transcript and request lifecycle.
//!
//! DESIGN
//! ======
//! A send is split into two synchronous steps around the network call:
//! `begin_send` validates input, appends the user turn and raises the
//! `awaiting` gate; `complete` appends exactly one model turn and lowers
//! the gate. The component runs the relay call between the two. Because
//! `begin_send` refuses while the gate is up, at most one request is ever
//! outstanding and user/model turns strictly alternate.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use uuid::Uuid;

use crate::net::types::ChatReply;

pub const WELCOME_MESSAGE: &str = "Welcome to the AURA Collective. How should we construct your silhouette today? ◈";

/// Which side of the conversation a message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Set when the text is a fallback rather than model output.
    pub is_error: bool,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into(), is_error: false }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Model, text: text.into(), is_error: false }
    }
}

/// A validated message ready to relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub session_id: Uuid,
    pub text: String,
}

/// State for the chat widget.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub awaiting: bool,
    pub open: bool,
    session_id: Option<Uuid>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { messages: vec![ChatMessage::model(WELCOME_MESSAGE)], awaiting: false, open: false, session_id: None }
    }
}

impl ChatState {
    /// Whether the send control should be enabled for `input`.
    #[must_use]
    pub fn can_send(&self, input: &str) -> bool {
        !self.awaiting && !input.trim().is_empty()
    }

    /// Conversation session id, minted on first use and reused afterwards.
    pub fn session_id(&mut self) -> Uuid {
        *self.session_id.get_or_insert_with(Uuid::new_v4)
    }

    /// Start a send cycle.
    ///
    /// Returns `None` (and changes nothing) for blank input or while a
    /// previous request is outstanding. Otherwise appends the user turn,
    /// raises the awaiting gate and returns the message to relay. The raw
    /// input is kept as typed; trimming only decides emptiness.
    pub fn begin_send(&mut self, input: &str) -> Option<OutboundMessage> {
        if !self.can_send(input) {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.awaiting = true;
        Some(OutboundMessage { session_id: self.session_id(), text: input.to_owned() })
    }

    /// Finish the outstanding send cycle with the relay outcome.
    ///
    /// Ignored when nothing is outstanding, so a user turn is always
    /// followed by exactly one model turn.
    pub fn complete(&mut self, reply: &ChatReply) {
        if !self.awaiting {
            return;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::Model,
            text: reply.display_text().to_owned(),
            is_error: reply.is_fallback(),
        });
        self.awaiting = false;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }
}
