//! In-memory rate limiting for chat relays.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `VecDeque<Instant>`. Two limits:
//! - Per-session: 10 relays/min
//! - Global: 30 LLM calls/min
//!
//! The global window is checked first, so a flood of fresh session ids is
//! capped before any per-session state is created. Per-session deques that
//! empty out are dropped on every check, which bounds the map by the number
//! of sessions active inside one window.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use uuid::Uuid;

const DEFAULT_PER_SESSION_LIMIT: usize = 10;
const DEFAULT_PER_SESSION_WINDOW_SECS: u64 = 60;

const DEFAULT_GLOBAL_LIMIT: usize = 30;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_session_limit: usize,
    pub per_session_window: Duration,
    pub global_limit: usize,
    pub global_window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_session_limit: DEFAULT_PER_SESSION_LIMIT,
            per_session_window: Duration::from_secs(DEFAULT_PER_SESSION_WINDOW_SECS),
            global_limit: DEFAULT_GLOBAL_LIMIT,
            global_window: Duration::from_secs(DEFAULT_GLOBAL_WINDOW_SECS),
        }
    }
}

impl RateLimitConfig {
    /// Read overrides from `CHAT_RATE_LIMIT_PER_SESSION`,
    /// `CHAT_RATE_LIMIT_PER_SESSION_WINDOW_SECS`, `CHAT_RATE_LIMIT_GLOBAL` and
    /// `CHAT_RATE_LIMIT_GLOBAL_WINDOW_SECS`. Unparseable values keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            per_session_limit: env_parse("CHAT_RATE_LIMIT_PER_SESSION", DEFAULT_PER_SESSION_LIMIT),
            per_session_window: Duration::from_secs(env_parse(
                "CHAT_RATE_LIMIT_PER_SESSION_WINDOW_SECS",
                DEFAULT_PER_SESSION_WINDOW_SECS,
            )),
            global_limit: env_parse("CHAT_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(env_parse("CHAT_RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS)),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-session rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerSessionExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-session request timestamps. Only sessions with requests inside
    /// the window are kept.
    session_requests: HashMap<Uuid, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RateLimitConfig::from_env())
    }

    #[must_use]
    pub fn with_config(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both global and per-session limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns the first limit that is already exhausted; nothing is recorded.
    pub fn check_and_record(&self, session_id: Uuid) -> Result<(), RateLimitError> {
        self.check_and_record_at(session_id, Instant::now())
    }

    fn check_and_record_at(&self, session_id: Uuid, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        prune_window(&mut inner.global_requests, now, cfg.global_window);
        inner.session_requests.retain(|_, deque| {
            prune_window(deque, now, cfg.per_session_window);
            !deque.is_empty()
        });

        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        let recent = inner
            .session_requests
            .get(&session_id)
            .map_or(0, VecDeque::len);
        if recent >= cfg.per_session_limit {
            return Err(RateLimitError::PerSessionExceeded {
                limit: cfg.per_session_limit,
                window_secs: cfg.per_session_window.as_secs(),
            });
        }

        inner
            .session_requests
            .entry(session_id)
            .or_default()
            .push_back(now);
        inner.global_requests.push_back(now);

        Ok(())
    }

    #[cfg(test)]
    fn tracked_sessions(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .session_requests
            .len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
