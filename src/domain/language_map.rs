//! Localized text keyed by language tag

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of RFC 5646 language tags to text in that language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMap(BTreeMap<String, String>);

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(tag, text)` pairs
    pub fn create<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(tag, text)| (tag.into(), text.into()))
                .collect(),
        )
    }

    /// Returns a copy with `tag` set to `text`, replacing an existing entry
    pub fn with_entry(&self, tag: impl Into<String>, text: impl Into<String>) -> Self {
        let mut entries = self.0.clone();
        entries.insert(tag.into(), text.into());
        Self(entries)
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }

    pub fn language_tags(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
