//! Input resolution: turn a user-supplied URL, file path or `-` into page text.
//!
//! URLs are fetched with a plain HTTP GET (no JavaScript execution) and the
//! HTML is reduced to its visible text: text nodes outside `script`,
//! `style`, `noscript` and `template` are joined and whitespace runs are
//! collapsed to single spaces. Local `.html`/`.htm` files get the same
//! treatment; any other file is read verbatim.

use crate::error::NameSiftError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Input value meaning "read standard input".
pub const STDIN: &str = "-";

const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Check if the input string looks like a URL.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Resolve `input` to non-blank page text.
///
/// # Errors
/// `FileNotFound`, `FetchFailed`, `FetchTimeout`, or `EmptyInput` when the
/// resolved text is blank.
pub async fn resolve_input(input: &str, fetch_timeout_secs: u64) -> Result<String, NameSiftError> {
    let text = if is_url(input) {
        fetch_page_text(input, fetch_timeout_secs).await?
    } else if input == STDIN {
        read_stdin().await?
    } else {
        read_local(Path::new(input)).await?
    };

    if text.trim().is_empty() {
        return Err(NameSiftError::EmptyInput {
            input: input.to_string(),
        });
    }
    Ok(text)
}

/// Download `url` and return its visible text.
pub async fn fetch_page_text(url: &str, timeout_secs: u64) -> Result<String, NameSiftError> {
    info!("Fetching page: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| NameSiftError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let fetch_error = |e: reqwest::Error| {
        if e.is_timeout() {
            NameSiftError::FetchTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            NameSiftError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    };

    let response = client.get(url).send().await.map_err(fetch_error)?;

    if !response.status().is_success() {
        return Err(NameSiftError::FetchFailed {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let html = response.text().await.map_err(fetch_error)?;
    let text = html_to_text(&html);
    info!("Fetched {} bytes of HTML, {} chars of text", html.len(), text.chars().count());
    Ok(text)
}

/// Visible text of an HTML document, whitespace-normalised.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::with_capacity(html.len() / 2);

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
        });
        if !hidden {
            raw.push_str(text);
            raw.push(' ');
        }
    }

    collapse_whitespace(&raw)
}

/// Replace every whitespace run with one space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    RE_WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

async fn read_local(path: &Path) -> Result<String, NameSiftError> {
    if !path.exists() {
        return Err(NameSiftError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| NameSiftError::InvalidInput {
            reason: format!("cannot read '{}': {}", path.display(), e),
        })?;

    debug!("Read {} bytes from {}", content.len(), path.display());
    if is_html_path(path) {
        Ok(html_to_text(&content))
    } else {
        Ok(content)
    }
}

async fn read_stdin() -> Result<String, NameSiftError> {
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .map_err(|e| NameSiftError::InvalidInput {
            reason: format!("cannot read stdin: {}", e),
        })?;
    Ok(buf)
}

fn is_html_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}
