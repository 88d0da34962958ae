//! Extraction entry points.
//!
//! [`extract`] runs the whole pipeline for one piece of text and always
//! returns an [`ExtractionOutcome`]: a missing key, a failed call and a reply
//! without names are all distinct variants, yet none of them is an `Err`.
//! Callers that only want something to display use
//! [`ExtractionOutcome::into_names`], which degrades every non-success case
//! to an empty [`NameList`].

use crate::config::ExtractionConfig;
use crate::error::{ExtractionFailure, NameSiftError};
use crate::names::NameList;
use crate::pipeline::{input, llm::GeminiClient, parse};
use crate::prompts::{build_prompt, DEFAULT_PROMPT};
use serde::Serialize;
use std::time::Instant;
use tracing::{error, info, warn};

/// Result of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// At least one name survived filtering.
    Names(NameList),
    /// The API answered but no token passed the name rule.
    NoCandidates,
    /// No API key was configured; no request was made.
    MissingCredential,
    /// The API call failed.
    Failed(ExtractionFailure),
}

impl ExtractionOutcome {
    /// The extracted names, empty for every non-success outcome.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Names(list) => list.as_slice(),
            _ => &[],
        }
    }

    /// Consume the outcome, yielding an empty list unless names were found.
    pub fn into_names(self) -> NameList {
        match self {
            Self::Names(list) => list,
            _ => NameList::new(),
        }
    }

    /// Whether the call failed or could not be attempted.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::MissingCredential)
    }

    /// Human-readable one-line summary.
    pub fn message(&self) -> String {
        match self {
            Self::Names(list) => format!("Extracted {} names", list.len()),
            Self::NoCandidates => "No names extracted.".to_string(),
            Self::MissingCredential => "No API key configured; no request was made".to_string(),
            Self::Failed(e) => format!("Error calling API: {}", e),
        }
    }
}

/// Extract person names from `text`.
///
/// Issues exactly one `generateContent` request unless the API key is
/// missing. `text` is not validated; empty text is sent as-is.
pub async fn extract(text: &str, config: &ExtractionConfig) -> ExtractionOutcome {
    let Some(api_key) = config.credential() else {
        let outcome = ExtractionOutcome::MissingCredential;
        warn!("{}", outcome.message());
        return outcome;
    };

    let start = Instant::now();
    info!(
        "Extracting names from {} chars of text with {}",
        text.chars().count(),
        config.model
    );

    let instruction = config.prompt.as_deref().unwrap_or(DEFAULT_PROMPT);
    let prompt = build_prompt(instruction, text);

    let response = match GeminiClient::new(config, api_key) {
        Ok(client) => client.generate(prompt).await,
        Err(e) => Err(e),
    };

    let response = match response {
        Ok(r) => r,
        Err(failure) => {
            let outcome = ExtractionOutcome::Failed(failure);
            error!("{}", outcome.message());
            return outcome;
        }
    };

    if let Some(usage) = response.usage {
        info!(
            "{} prompt tokens, {} output tokens",
            usage.prompt_token_count, usage.candidates_token_count
        );
    }

    let names = parse::parse_response(&response, &config.rule);
    let outcome = if names.is_empty() {
        ExtractionOutcome::NoCandidates
    } else {
        ExtractionOutcome::Names(names)
    };

    match &outcome {
        ExtractionOutcome::NoCandidates => warn!("{}", outcome.message()),
        _ => info!("{} in {}ms", outcome.message(), start.elapsed().as_millis()),
    }
    outcome
}

/// Resolve `input` (URL, file path or `-`) to text, then [`extract`] from it.
///
/// # Errors
/// Only input resolution errors are returned as `Err`; API problems are
/// reported through the outcome.
pub async fn extract_from_input(
    input_str: impl AsRef<str>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutcome, NameSiftError> {
    let text = input::resolve_input(input_str.as_ref(), config.fetch_timeout_secs).await?;
    Ok(extract(&text, config).await)
}

/// Synchronous wrapper around [`extract`].
///
/// Creates a temporary tokio runtime internally, so it must not be called
/// from within an async context.
pub fn extract_sync(text: &str, config: &ExtractionConfig) -> Result<ExtractionOutcome, NameSiftError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| NameSiftError::Internal(format!("Failed to create tokio runtime: {}", e)))?;
    Ok(runtime.block_on(extract(text, config)))
}
