//! Chat relay: per-session conversation history in front of the LLM.
//!
//! DESIGN
//! ======
//! Each browser session id owns one `ChatSession` holding the alternating
//! user/model turns sent as context on every call. A relay holds its
//! session's mutex for the whole LLM call; a second relay for the same
//! session is refused instead of queued.
//!
//! Sessions idle past `SessionLimits::idle_ttl` are evicted when a new one
//! is created, and the registry never exceeds `SessionLimits::max_sessions`.
//! Every relay first passes the per-session and global rate limits.
//!
//! Failures never reach the caller as errors. Transport, status and parse
//! problems (and a missing LLM client) all resolve to `ChatReply::Failed`
//! after a warning is logged.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use client::net::types::ChatReply;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::llm::LlmChat;
use crate::llm::types::{ChatResponse, LlmError, Message};
use crate::rate_limit::{RateLimitError, env_parse};
use crate::state::AppState;

/// System instruction fixed for every session.
pub const PERSONA: &str = "You are 'AURA Vibe Architect', a luxury fashion consultant.
The brand is 'AURA' - avant-garde, minimalist, sustainable, and high-tech streetwear.

Tone: Sophisticated, minimalist, observant, and encouraging. Use elegant emojis like ◈, ✦, ☁︎, ⬖.

Key Info:
- Philosophy: \"Human-centric digital wear.\"
- Products: 'Ghost Shell' (Jacket), 'Void Hoodie', 'Aura-1 Sneakers'.
- Materials: Bio-reclaimed nylon, liquid-infused cotton, carbon-neutral threads.

When someone describes a mood or an event, recommend one of our pieces with a short poetic justification. Keep responses under 45 words.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("session {0} already has a relay in flight")]
    SessionBusy(Uuid),
    #[error("rate limited: {0}")]
    RateLimited(#[from] RateLimitError),
}

// =============================================================================
// SESSION
// =============================================================================

/// Conversation history for one browser session.
#[derive(Debug, Default)]
pub struct ChatSession {
    history: Vec<Message>,
}

impl ChatSession {
    #[must_use]
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Send one user turn with the prior history as context.
    ///
    /// The request is built from a copy of the history, and the turn pair is
    /// written back only when the model returned text. An empty reply, an
    /// error, or a call dropped mid-flight leaves the history as it was.
    ///
    /// # Errors
    ///
    /// Propagates the [`LlmError`] from the underlying call.
    pub async fn send(&mut self, llm: &dyn LlmChat, message: &str) -> Result<(ChatReply, ChatResponse), LlmError> {
        let mut turns = Vec::with_capacity(self.history.len() + 1);
        turns.extend_from_slice(&self.history);
        turns.push(Message::user(message));

        let response = llm.chat(PERSONA, &turns).await?;
        let reply = ChatReply::from_text(response.text.clone());

        if let ChatReply::Reply { text } = &reply {
            self.history.push(Message::user(message));
            self.history.push(Message::model(text.clone()));
        }
        Ok((reply, response))
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Bounds on the session registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Sessions unused for longer than this are dropped.
    pub idle_ttl: Duration,
    /// Upper bound on live sessions; the least recently used idle one goes first.
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self { idle_ttl: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS), max_sessions: DEFAULT_MAX_SESSIONS }
    }
}

impl SessionLimits {
    /// Read `CHAT_SESSION_IDLE_SECS` and `CHAT_MAX_SESSIONS`, keeping defaults
    /// for unset or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            idle_ttl: Duration::from_secs(env_parse("CHAT_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)),
            max_sessions: env_parse("CHAT_MAX_SESSIONS", DEFAULT_MAX_SESSIONS).max(1),
        }
    }
}

struct SessionEntry {
    session: Arc<Mutex<ChatSession>>,
    last_used: Instant,
}

impl SessionEntry {
    /// A relay holds the session mutex for its whole LLM call.
    fn in_flight(&self) -> bool {
        self.session.try_lock().is_err()
    }
}

/// Live sessions keyed by the browser-minted session id.
#[derive(Clone)]
pub struct ChatSessions {
    inner: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    limits: SessionLimits,
}

impl Default for ChatSessions {
    fn default() -> Self {
        Self::with_limits(SessionLimits::default())
    }
}

impl ChatSessions {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(SessionLimits::from_env())
    }

    #[must_use]
    pub fn with_limits(limits: SessionLimits) -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())), limits }
    }

    /// Return the session for `id`, creating an empty one on first use.
    ///
    /// Creating a session first evicts idle ones and, at capacity, the least
    /// recently used session that has no relay in flight.
    pub async fn get_or_create(&self, id: Uuid) -> Arc<Mutex<ChatSession>> {
        self.get_or_create_at(id, Instant::now()).await
    }

    async fn get_or_create_at(&self, id: Uuid, now: Instant) -> Arc<Mutex<ChatSession>> {
        let mut sessions = self.inner.write().await;
        if let Some(entry) = sessions.get_mut(&id) {
            entry.last_used = now;
            return Arc::clone(&entry.session);
        }

        let evicted = evict(&mut sessions, now, self.limits);
        if evicted > 0 {
            debug!(evicted, live = sessions.len(), "chat sessions evicted");
        }

        let session = Arc::new(Mutex::new(ChatSession::default()));
        sessions.insert(id, SessionEntry { session: Arc::clone(&session), last_used: now });
        session
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Make room for one more session. Returns how many entries were dropped.
fn evict(sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant, limits: SessionLimits) -> usize {
    let before = sessions.len();
    sessions.retain(|_, entry| entry.in_flight() || now.duration_since(entry.last_used) <= limits.idle_ttl);

    while sessions.len() >= limits.max_sessions {
        let oldest = sessions
            .iter()
            .filter(|(_, entry)| !entry.in_flight())
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| *id);
        let Some(oldest) = oldest else {
            break;
        };
        sessions.remove(&oldest);
    }

    before - sessions.len()
}

// =============================================================================
// RELAY
// =============================================================================

/// Relay one user message for `session_id` and classify the outcome.
///
/// # Errors
///
/// Returns [`ChatError::EmptyMessage`] for blank input,
/// [`ChatError::RateLimited`] when a per-session or global limit is spent, and
/// [`ChatError::SessionBusy`] when the session already has a call in flight.
pub async fn handle_message(state: &AppState, session_id: Uuid, message: &str) -> Result<ChatReply, ChatError> {
    if message.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    let Some(llm) = state.llm.as_ref() else {
        warn!(%session_id, "chat relay requested but LLM client is not configured");
        return Ok(ChatReply::Failed);
    };

    // Checked before the registry so rejected ids never allocate a session.
    if let Err(e) = state.rate_limiter.check_and_record(session_id) {
        warn!(%session_id, error = %e, "chat relay rate limited");
        return Err(e.into());
    }

    let entry = state.chat_sessions.get_or_create(session_id).await;
    let Ok(mut session) = entry.try_lock() else {
        return Err(ChatError::SessionBusy(session_id));
    };

    match session.send(llm.as_ref(), message).await {
        Ok((reply, response)) => {
            info!(
                %session_id,
                model = %response.model,
                finish_reason = response.finish_reason.as_deref().unwrap_or("-"),
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                turns = session.history().len(),
                fallback = reply.is_fallback(),
                "chat relay complete"
            );
            Ok(reply)
        }
        Err(e) => {
            warn!(%session_id, error = %e, "chat relay failed");
            Ok(ChatReply::Failed)
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;
