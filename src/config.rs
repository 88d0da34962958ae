//! Configuration types for name extraction.
//!
//! All extraction behaviour is controlled through [`ExtractionConfig`],
//! built via its [`ExtractionConfigBuilder`]. The API key is part of the
//! config rather than a separate argument so a single value can be handed
//! to [`crate::extract::extract`], [`crate::session::Session`] and the
//! input resolver alike.

use crate::error::NameSiftError;
use crate::names::NameRule;
use std::fmt;

/// Public Gemini endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration for a name extraction.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use namesift::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .api_key("my-key")
///     .model("gemini-1.5-pro")
///     .min_words(2)
///     .build()
///     .unwrap();
/// assert_eq!(config.model, "gemini-1.5-pro");
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// Gemini API key. `None` or empty short-circuits extraction without a
    /// network call.
    pub api_key: Option<String>,

    /// Model identifier inserted into the request path. Default: `gemini-1.5-flash`.
    pub model: String,

    /// Scheme and host of the API, without a trailing slash.
    pub base_url: String,

    /// Custom instruction prompt. If None, uses [`crate::prompts::DEFAULT_PROMPT`].
    pub prompt: Option<String>,

    /// Filter applied to every comma-separated token of the reply.
    pub rule: NameRule,

    /// Timeout of the generateContent call in seconds. Default: 60.
    pub api_timeout_secs: u64,

    /// Timeout of page downloads for URL inputs in seconds. Default: 30.
    pub fetch_timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            prompt: None,
            rule: NameRule::default(),
            api_timeout_secs: 60,
            fetch_timeout_secs: 30,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("prompt", &self.prompt.as_ref().map(|p| p.len()))
            .field("rule", &self.rule)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Build a config from `GEMINI_API_KEY`, `GEMINI_MODEL` and
    /// `GEMINI_BASE_URL`, falling back to defaults for anything unset.
    ///
    /// # Errors
    /// Returns [`NameSiftError::InvalidConfig`] when a variable holds a value
    /// [`ExtractionConfigBuilder::build`] rejects, e.g. a non-HTTP base URL.
    pub fn from_env() -> Result<Self, NameSiftError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NameSiftError> {
        let mut builder = Self::builder();
        if let Some(key) = lookup("GEMINI_API_KEY") {
            builder = builder.api_key(key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            builder = builder.model(model);
        }
        if let Some(url) = lookup("GEMINI_BASE_URL") {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    /// The API key, or `None` when it is missing or blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = Some(prompt.into());
        self
    }

    pub fn min_words(mut self, n: usize) -> Self {
        self.config.rule = NameRule::new(n);
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.config.fetch_timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, NameSiftError> {
        let c = &self.config;
        if c.model.trim().is_empty() {
            return Err(NameSiftError::InvalidConfig("Model must not be empty".into()));
        }
        if !(c.base_url.starts_with("http://") || c.base_url.starts_with("https://")) {
            return Err(NameSiftError::InvalidConfig(format!(
                "Base URL must start with http:// or https://, got '{}'",
                c.base_url
            )));
        }
        if c.api_timeout_secs == 0 || c.fetch_timeout_secs == 0 {
            return Err(NameSiftError::InvalidConfig(
                "Timeouts must be ≥ 1 second".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ExtractionConfig::default();
        assert_eq!(c.model, DEFAULT_MODEL);
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
        assert_eq!(c.rule.min_words(), 2);
        assert!(c.credential().is_none());
    }

    #[test]
    fn blank_key_is_no_credential() {
        let c = ExtractionConfig::builder().api_key("   ").build().unwrap();
        assert!(c.credential().is_none());
    }

    #[test]
    fn debug_redacts_key() {
        let c = ExtractionConfig::builder()
            .api_key("super-secret")
            .build()
            .unwrap();
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("super-secret"), "got: {dbg}");
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let c = ExtractionConfig::builder()
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(c.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = ExtractionConfig::builder()
            .base_url("ftp://example.org")
            .build()
            .unwrap_err();
        assert!(matches!(err, NameSiftError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(ExtractionConfig::builder()
            .api_timeout_secs(0)
            .build()
            .is_err());
    }

    #[test]
    fn env_values_are_validated() {
        let c = ExtractionConfig::from_lookup(|name| match name {
            "GEMINI_API_KEY" => Some("env-key".into()),
            "GEMINI_MODEL" => Some("gemini-2.0-flash".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(c.credential(), Some("env-key"));
        assert_eq!(c.model, "gemini-2.0-flash");
        assert_eq!(c.base_url, DEFAULT_BASE_URL);

        let err = ExtractionConfig::from_lookup(|name| {
            (name == "GEMINI_BASE_URL").then(|| "generativelanguage.googleapis.com".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, NameSiftError::InvalidConfig(_)), "got {err:?}");
    }
}
