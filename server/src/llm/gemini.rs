//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `POST {base}/models/{model}:generateContent`. Pure
//! parsing in `parse_response` for testability.

use super::config::LlmTimeouts;
use super::types::{ChatResponse, LlmError, Message};
use std::time::Duration;

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder().connect_timeout(Duration::from_secs(timeouts.connect_secs));
        if let Some(secs) = timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn chat(&self, model: &str, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        let body = ApiRequest {
            system_instruction: SystemInstruction { parts: [PartRef { text: system }] },
            contents: messages,
        };

        let response = self
            .http
            .post(endpoint(&self.base_url, model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text, model)
    }
}

fn endpoint(base_url: &str, model: &str) -> String {
    format!("{base_url}/models/{model}:generateContent")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: &'a [Message],
}

#[derive(serde::Serialize)]
struct SystemInstruction<'a> {
    parts: [PartRef<'a>; 1],
}

#[derive(serde::Serialize)]
struct PartRef<'a> {
    text: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

/// Non-text parts (inline data, function calls) deserialize with `text: None`.
#[derive(serde::Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str, requested_model: &str) -> Result<ChatResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let first = api.candidates.into_iter().next();
    let finish_reason = first.as_ref().and_then(|c| c.finish_reason.clone());
    let text: String = first
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    let usage = api.usage_metadata.unwrap_or(UsageMetadata { prompt_token_count: 0, candidates_token_count: 0 });

    Ok(ChatResponse {
        text: (!text.is_empty()).then_some(text),
        model: api.model_version.unwrap_or_else(|| requested_model.to_string()),
        finish_reason,
        input_tokens: usage.prompt_token_count,
        output_tokens: usage.candidates_token_count,
    })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
