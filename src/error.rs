//! Error types for the namesift library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`NameSiftError`] — **Fatal**: the operation cannot proceed at all
//!   (input file missing, page download failed, CSV unreadable, bad config).
//!   Returned as `Err(NameSiftError)` from input resolution, export and
//!   config building.
//!
//! * [`ExtractionFailure`] — **Non-fatal**: the API call itself failed
//!   (connection refused, timeout, non-2xx status, garbage body). Carried
//!   inside [`crate::extract::ExtractionOutcome::Failed`] so an extraction
//!   never aborts its caller, while the reason stays inspectable.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the namesift library.
///
/// API-call failures use [`ExtractionFailure`] and are reported through
/// [`crate::extract::ExtractionOutcome`] rather than propagated here.
#[derive(Debug, Error)]
pub enum NameSiftError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Input file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// The input is unusable (blank search query, empty name list, …).
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// HTTP URL was syntactically valid but the page download failed.
    #[error("Failed to fetch '{url}': {reason}\nCheck your internet connection.")]
    FetchFailed { url: String, reason: String },

    /// Page download exceeded the configured timeout.
    #[error("Fetching '{url}' timed out after {secs}s\nIncrease --fetch-timeout.")]
    FetchTimeout { url: String, secs: u64 },

    /// The input resolved to text that is empty or whitespace only.
    #[error("No text could be extracted from '{input}'")]
    EmptyInput { input: String },

    // ── Name list I/O errors ──────────────────────────────────────────────
    /// Reading or writing the CSV name list failed.
    #[error("CSV error for '{path}': {detail}")]
    CsvFailed { path: PathBuf, detail: String },

    /// Could not create or write an output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Export was requested but there are no names to write.
    #[error("No names to save")]
    NothingToSave,

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal failure of the generative API call.
///
/// Stored in [`crate::extract::ExtractionOutcome::Failed`]. Display output
/// never contains the API key.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum ExtractionFailure {
    /// Connection, DNS or TLS failure before a response arrived.
    #[error("API request failed: {detail}")]
    Transport { detail: String },

    /// The API call did not complete within the configured timeout.
    #[error("API request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The API answered with a non-success status.
    #[error("API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not the expected JSON document.
    #[error("API response could not be parsed: {detail}")]
    MalformedResponse { detail: String },
}

impl ExtractionFailure {
    /// Whether the failure happened before any HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}
