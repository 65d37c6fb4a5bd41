//! LLM: Gemini adapter behind a mockable chat trait.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. `LlmClient` owns the
//! model name and delegates the HTTP call to `gemini::GeminiClient`; the rest
//! of the server only sees `dyn LlmChat`.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client configured by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: gemini::GeminiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables. See [`LlmConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"gemini-3-flash-preview"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.inner.chat(&self.model, system, messages).await
    }
}
