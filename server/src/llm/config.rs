//! LLM configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    /// Whole-request limit. `None` lets a call run until the service answers.
    pub request_secs: Option<u64>,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Build typed LLM config from environment variables.
    ///
    /// - `LLM_API_KEY_ENV`: names the env var containing the key (default `API_KEY`)
    /// - `LLM_MODEL`: default `gemini-3-flash-preview`
    /// - `LLM_BASE_URL`: default Generative Language API v1beta endpoint
    /// - `LLM_REQUEST_TIMEOUT_SECS`: unset by default
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] when the key variable is unset or
    /// blank, and [`LlmError::ConfigParse`] when a timeout is not a number.
    pub fn from_env() -> Result<Self, LlmError> {
        let key_var = std::env::var("LLM_API_KEY_ENV").unwrap_or_else(|_| DEFAULT_API_KEY_ENV.to_string());
        let api_key = std::env::var(&key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey { var: key_var.clone() })?;

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = LlmTimeouts {
            request_secs: env_parse_opt_u64("LLM_REQUEST_TIMEOUT_SECS")?,
            connect_secs: env_parse_opt_u64("LLM_CONNECT_TIMEOUT_SECS")?.unwrap_or(DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_key, model, base_url, timeouts })
    }
}

fn env_parse_opt_u64(key: &str) -> Result<Option<u64>, LlmError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| LlmError::ConfigParse(format!("{key} must be a whole number of seconds, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
