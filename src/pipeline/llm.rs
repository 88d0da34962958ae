//! Gemini interaction: send the prompt and decode the reply.
//!
//! This module is intentionally thin. Prompt wording lives in
//! [`crate::prompts`] and reply interpretation in [`crate::pipeline::parse`],
//! so the code here only deals with the HTTP exchange and maps every
//! failure onto an [`ExtractionFailure`].
//!
//! The API key travels as the `key` query parameter. `reqwest` errors embed
//! the request URL in their `Display`, so they are stripped with
//! [`reqwest::Error::without_url`] before being logged or returned.

use crate::config::ExtractionConfig;
use crate::error::ExtractionFailure;
use crate::pipeline::request::{GenerateRequest, GenerateResponse};
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest error body kept in [`ExtractionFailure::HttpStatus`].
const MAX_ERROR_BODY: usize = 500;

/// HTTP client bound to one model and one API key.
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Build a client from `config`, using `api_key` as the credential.
    pub fn new(config: &ExtractionConfig, api_key: &str) -> Result<Self, ExtractionFailure> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(|e| ExtractionFailure::Transport {
                detail: e.without_url().to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint(&config.base_url, &config.model),
            api_key: api_key.to_string(),
            timeout_secs: config.api_timeout_secs,
        })
    }

    /// The request URL without the key.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `prompt` as the sole text part and decode the JSON reply.
    pub async fn generate(&self, prompt: String) -> Result<GenerateResponse, ExtractionFailure> {
        let start = Instant::now();
        let body = GenerateRequest::single_text(prompt);
        debug!("POST {} ({} prompt bytes)", self.endpoint, body.contents[0].parts[0].text.len());

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_failure(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_failure(e))?;

        debug!("HTTP {} after {:?}, {} bytes", status, start.elapsed(), text.len());

        if !status.is_success() {
            return Err(ExtractionFailure::HttpStatus {
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY),
            });
        }

        serde_json::from_str(&text).map_err(|e| ExtractionFailure::MalformedResponse {
            detail: e.to_string(),
        })
    }

    fn transport_failure(&self, e: reqwest::Error) -> ExtractionFailure {
        if e.is_timeout() {
            ExtractionFailure::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            ExtractionFailure::Transport {
                detail: e.without_url().to_string(),
            }
        }
    }
}

/// `{base_url}/v1beta/models/{model}:generateContent`
pub fn endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

fn truncate(s: &str, max: usize) -> String {
    let s = s.trim();
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}\u{2026}", &s[..idx]),
        None => s.to_string(),
    }
}
