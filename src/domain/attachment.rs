//! Digital artefacts attached to a statement

use sha2::{Digest, Sha256};

use crate::domain::iri::{Iri, Irl};
use crate::domain::language_map::LanguageMap;
use crate::error::{Error, Result};

/// An attachment must be retrievable from somewhere: a file URL, raw
/// content, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    usage_type: Iri,
    content_type: String,
    length: u64,
    sha2: String,
    display: LanguageMap,
    description: Option<LanguageMap>,
    file_url: Option<Irl>,
    content: Option<String>,
}

fn sha256_hex(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

impl Attachment {
    pub fn new(
        usage_type: Iri,
        content_type: impl Into<String>,
        length: u64,
        sha2: impl Into<String>,
        display: LanguageMap,
        file_url: Option<Irl>,
        content: Option<String>,
    ) -> Result<Self> {
        if file_url.is_none() && content.is_none() {
            tracing::debug!(usage_type = %usage_type, "rejected attachment without data");
            return Err(Error::AttachmentWithoutData);
        }

        Ok(Self {
            usage_type,
            content_type: content_type.into(),
            length,
            sha2: sha2.into(),
            display,
            description: None,
            file_url,
            content,
        })
    }

    /// Builds an attachment around raw content, deriving its length and
    /// SHA-256 hash
    pub fn from_content(
        usage_type: Iri,
        content_type: impl Into<String>,
        display: LanguageMap,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        Self {
            usage_type,
            content_type: content_type.into(),
            length: content.len() as u64,
            sha2: sha256_hex(&content),
            display,
            description: None,
            file_url: None,
            content: Some(content),
        }
    }

    pub fn usage_type(&self) -> &Iri {
        &self.usage_type
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn sha2(&self) -> &str {
        &self.sha2
    }

    pub fn display(&self) -> &LanguageMap {
        &self.display
    }

    pub fn description(&self) -> Option<&LanguageMap> {
        self.description.as_ref()
    }

    pub fn file_url(&self) -> Option<&Irl> {
        self.file_url.as_ref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn with_usage_type(&self, usage_type: Iri) -> Self {
        Self {
            usage_type,
            ..self.clone()
        }
    }

    pub fn with_content_type(&self, content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            ..self.clone()
        }
    }

    pub fn with_length(&self, length: u64) -> Self {
        Self {
            length,
            ..self.clone()
        }
    }

    pub fn with_sha2(&self, sha2: impl Into<String>) -> Self {
        Self {
            sha2: sha2.into(),
            ..self.clone()
        }
    }

    pub fn with_display(&self, display: LanguageMap) -> Self {
        Self {
            display,
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: Option<LanguageMap>) -> Self {
        Self {
            description,
            ..self.clone()
        }
    }

    pub fn with_file_url(&self, file_url: Option<Irl>) -> Result<Self> {
        if file_url.is_none() && self.content.is_none() {
            return Err(Error::AttachmentWithoutData);
        }
        Ok(Self {
            file_url,
            ..self.clone()
        })
    }

    /// Replaces the raw content
    ///
    /// New content also replaces `length` and `sha2` with values derived from
    /// it. Clearing the content keeps them, as they then describe the file.
    pub fn with_content(&self, content: Option<String>) -> Result<Self> {
        match content {
            Some(content) => Ok(Self {
                length: content.len() as u64,
                sha2: sha256_hex(&content),
                content: Some(content),
                ..self.clone()
            }),
            None if self.file_url.is_none() => Err(Error::AttachmentWithoutData),
            None => Ok(Self {
                content: None,
                ..self.clone()
            }),
        }
    }
}
