//! Resource identifier newtypes
//!
//! xAPI identifies activities, verbs, extension keys and mailboxes with IRIs
//! and points at retrievable documents with IRLs. Both are validated once at
//! the factory boundary and compared by exact string equality afterwards.

use nutype::nutype;

use crate::error::{Error, Result};

/// Internationalized resource identifier
///
/// Any scheme is accepted (`http:`, `mailto:`, `urn:`, `tag:` ...) as long as
/// the remainder is non-empty and free of whitespace.
#[nutype(
    validate(regex = r"^[A-Za-z][A-Za-z0-9+.-]*:\S+$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Iri(String);

impl Iri {
    pub fn from_string(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        Self::try_new(value.clone()).map_err(|_| {
            tracing::debug!(%value, "rejected IRI");
            Error::invalid_iri(value)
        })
    }

    pub fn value(&self) -> &str {
        self.as_ref()
    }
}

/// Internationalized resource locator: an absolute, dereferenceable URL
#[nutype(
    validate(predicate = |value| {
        !value.chars().any(char::is_whitespace) && url::Url::parse(value).is_ok()
    }),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Irl(String);

impl Irl {
    pub fn from_string(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        Self::try_new(value.clone()).map_err(|_| {
            tracing::debug!(%value, "rejected IRL");
            Error::invalid_irl(value)
        })
    }

    pub fn value(&self) -> &str {
        self.as_ref()
    }
}
