use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_llm_env() {
    unsafe {
        std::env::remove_var("LLM_API_KEY_ENV");
        std::env::remove_var("LLM_MODEL");
        std::env::remove_var("LLM_BASE_URL");
        std::env::remove_var("LLM_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("LLM_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("API_KEY");
        std::env::remove_var("GEMINI_KEY");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe {
        clear_llm_env();
        std::env::set_var("API_KEY", "secret");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: None, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS });

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_llm_env();
        std::env::set_var("LLM_API_KEY_ENV", "GEMINI_KEY");
        std::env::set_var("GEMINI_KEY", "g-test");
        std::env::set_var("LLM_MODEL", "gemini-2.5-pro");
        std::env::set_var("LLM_BASE_URL", "https://example.test/v1/");
        std::env::set_var("LLM_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("LLM_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "g-test");
    assert_eq!(cfg.model, "gemini-2.5-pro");
    assert_eq!(cfg.base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: Some(42), connect_secs: 7 });

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_missing_key_errors() {
    unsafe {
        clear_llm_env();
        std::env::set_var("LLM_API_KEY_ENV", "GEMINI_KEY");
    }

    let err = LlmConfig::from_env().unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "GEMINI_KEY"));

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_blank_key_counts_as_missing() {
    unsafe {
        clear_llm_env();
        std::env::set_var("API_KEY", "   ");
    }

    let err = LlmConfig::from_env().unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_rejects_non_numeric_timeout() {
    unsafe {
        clear_llm_env();
        std::env::set_var("API_KEY", "secret");
        std::env::set_var("LLM_CONNECT_TIMEOUT_SECS", "soon");
    }

    let err = LlmConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("LLM_CONNECT_TIMEOUT_SECS"));

    unsafe { clear_llm_env() };
}
