//! Free-form extension data attached to definitions, results and contexts

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::iri::Iri;

/// Extension values keyed by IRI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions(BTreeMap<Iri, Value>);

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(&self, key: Iri, value: Value) -> Self {
        let mut entries = self.0.clone();
        entries.insert(key, value);
        Self(entries)
    }

    pub fn without_extension(&self, key: &Iri) -> Self {
        let mut entries = self.0.clone();
        entries.remove(key);
        Self(entries)
    }

    pub fn get(&self, key: &Iri) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Iri> {
        self.0.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
