//! Caller-owned holder of the most recent name list.
//!
//! A [`Session`] remembers the list produced by the last extraction or the
//! last CSV load, so follow-up actions (save, copy, search)
//! can act on it. It is a plain value: each caller owns its own session and
//! nothing is shared between them.

use crate::config::ExtractionConfig;
use crate::error::NameSiftError;
use crate::export;
use crate::extract::{extract, ExtractionOutcome};
use crate::names::NameList;
use reqwest::Url;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Default)]
pub struct Session {
    last: NameList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an extraction and make its result the current list.
    ///
    /// Every outcome overwrites the previous list; a failed or empty
    /// extraction leaves the session empty.
    pub async fn extract(&mut self, text: &str, config: &ExtractionConfig) -> ExtractionOutcome {
        let outcome = extract(text, config).await;
        self.last = outcome.names().iter().collect();
        outcome
    }

    /// Replace the current list with one loaded from a CSV file.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&NameList, NameSiftError> {
        self.last = export::load_csv(path)?;
        Ok(&self.last)
    }

    /// Replace the current list directly.
    pub fn set(&mut self, names: NameList) {
        self.last = names;
    }

    /// Save the current list as the next free `namesN.csv` in `dir`.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf, NameSiftError> {
        if self.last.is_empty() {
            warn!("No names to save.");
            return Err(NameSiftError::NothingToSave);
        }
        let path = export::next_export_path(dir);
        export::save_csv(&path, &self.last)?;
        Ok(path)
    }

    /// Comma-joined current list, or `None` when there is nothing to copy.
    pub fn copy_line(&self) -> Option<String> {
        if self.last.is_empty() {
            None
        } else {
            Some(export::copy_line(&self.last))
        }
    }

    /// Search links for every name of the current list.
    pub fn search_urls(&self, query: &str) -> Result<Vec<Url>, NameSiftError> {
        export::search_urls(&self.last, query)
    }

    pub fn last(&self) -> &NameList {
        &self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failed_extraction_clears_previous_list() {
        let mut session = Session::new();
        session.set(["Ada Lovelace"].into_iter().collect());

        let outcome = session
            .extract("some text", &ExtractionConfig::default())
            .await;
        assert_eq!(outcome, ExtractionOutcome::MissingCredential);
        assert!(session.last().is_empty());
        assert!(session.copy_line().is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        assert!(matches!(
            session.save(dir.path()),
            Err(NameSiftError::NothingToSave)
        ));
        assert!(session.copy_line().is_none());

        session.set(["Ada Lovelace", "Alan Turing"].into_iter().collect());
        let first = session.save(dir.path()).unwrap();
        let second = session.save(dir.path()).unwrap();
        assert!(first.ends_with("names1.csv"));
        assert!(second.ends_with("names2.csv"));

        let mut other = Session::new();
        other.load(&second).unwrap();
        assert_eq!(other.last(), session.last());
        assert_eq!(other.copy_line().as_deref(), Some("Ada Lovelace,Alan Turing"));
        assert_eq!(other.search_urls("github").unwrap().len(), 2);
    }
}
