use thiserror::Error;

/// Broad classification of a failure, independent of the concrete variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorKind {
    /// A factory rejected its input before any instance existed
    #[display("invalid input")]
    InvalidInput,
    /// The requested object graph would break a model invariant
    #[display("invariant violation")]
    InvariantViolation,
    /// A lower-level value was unusable while aggregating
    #[display("propagated")]
    Propagated,
    /// Configuration or telemetry setup failed
    #[display("environment")]
    Environment,
}

/// xAPI model error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IRI \"{value}\" is not valid")]
    InvalidIri { value: String },

    #[error("IRL \"{value}\" is not valid")]
    InvalidIrl { value: String },

    #[error("UUID \"{value}\" is not valid")]
    InvalidUuid { value: String },

    #[error("Profile id \"{value}\" is not valid")]
    InvalidProfileId { value: String },

    #[error("An attachment cannot be created without a file URL or raw content data")]
    AttachmentWithoutData,

    #[error("Nesting sub statements is forbidden by the xAPI spec")]
    NestedSubStatement,

    #[error("Agent at position {index} has no inverse functional identifier")]
    MissingInverseFunctionalIdentifier { index: usize },

    #[error("Statement has no id")]
    MissingStatementId,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl Error {
    pub fn invalid_iri(value: impl Into<String>) -> Self {
        Self::InvalidIri {
            value: value.into(),
        }
    }

    pub fn invalid_irl(value: impl Into<String>) -> Self {
        Self::InvalidIrl {
            value: value.into(),
        }
    }

    pub fn invalid_uuid(value: impl Into<String>) -> Self {
        Self::InvalidUuid {
            value: value.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIri { .. }
            | Self::InvalidIrl { .. }
            | Self::InvalidUuid { .. }
            | Self::InvalidProfileId { .. }
            | Self::AttachmentWithoutData => ErrorKind::InvalidInput,
            Self::NestedSubStatement | Self::MissingStatementId => ErrorKind::InvariantViolation,
            Self::MissingInverseFunctionalIdentifier { .. } => ErrorKind::Propagated,
            Self::Config(_) | Self::Telemetry(_) => ErrorKind::Environment,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
