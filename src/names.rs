//! The name list and the rule deciding what counts as a name.
//!
//! A [`NameList`] is an insertion-ordered set of trimmed strings: pushing a
//! value that is already present is a no-op, so the first occurrence wins.
//! Equality is exact after trimming, with no case folding.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Filter deciding whether a trimmed token plausibly is a full person name.
///
/// The rule is a word count: a token must contain at least `min_words`
/// whitespace-separated words. With the default of two it admits two-word
/// non-names ("Open Source") and rejects mononyms ("Plato"); raise or lower
/// the threshold to trade one error for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRule {
    min_words: usize,
}

impl Default for NameRule {
    fn default() -> Self {
        Self { min_words: 2 }
    }
}

impl NameRule {
    /// A rule requiring at least `min_words` words (minimum 1).
    pub fn new(min_words: usize) -> Self {
        Self {
            min_words: min_words.max(1),
        }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    /// Whether `token` (already trimmed) passes the rule.
    pub fn accepts(&self, token: &str) -> bool {
        !token.is_empty() && token.split_whitespace().count() >= self.min_words
    }
}

/// Ordered sequence of unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NameList {
    names: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `name` and append it unless it is empty or already present.
    ///
    /// Returns `true` when the name was added.
    pub fn push(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref().trim();
        if name.is_empty() || self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name.trim())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl<S: AsRef<str>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = NameList::new();
        list.extend(iter);
        list
    }
}

impl<S: AsRef<str>> Extend<S> for NameList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.push(name);
        }
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<NameList> for Vec<String> {
    fn from(list: NameList) -> Self {
        list.names
    }
}

impl IntoIterator for NameList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl PartialEq<[&str]> for NameList {
    fn eq(&self, other: &[&str]) -> bool {
        self.names.len() == other.len() && self.names.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for NameList {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}
