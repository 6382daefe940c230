//! Error types for the opnorm core library
//!
//! Every per-item error carries the zero-based position of the offending
//! operation. The normalizer stops at the first one, so a caller always sees
//! exactly one error per rejected batch.

use crate::types::Verb;
use thiserror::Error;

/// Main error type for opnorm operations
#[derive(Error, Debug)]
pub enum Error {
    /// The item has no usable verb signal or is not an object at all
    #[error("Operation {index}: malformed operation - {message}")]
    MalformedOperation { index: usize, message: String },

    /// The verb payload has the wrong JSON type
    #[error("Operation {index}: invalid {verb} payload - expected {expected}, found {found}")]
    InvalidPayload {
        index: usize,
        verb: Verb,
        expected: String,
        found: String,
    },

    /// None of resource-name parsing, shape inference or the override resolved a kind
    #[error(
        "Operation {index}: could not determine entity type for {verb} operation. \
         Provide an explicit entity type or use the canonical {{entity, operation, resource}} format"
    )]
    UnresolvedEntity { index: usize, verb: Verb },

    /// An entity string outside the closed vocabulary
    #[error("Operation {index}: unknown entity type '{value}'")]
    UnknownEntityKind { index: usize, value: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The remote mutation executor failed
    #[error("Executor error: {message}")]
    Executor {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Position of the offending operation, for per-item errors
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::MalformedOperation { index, .. }
            | Error::InvalidPayload { index, .. }
            | Error::UnresolvedEntity { index, .. }
            | Error::UnknownEntityKind { index, .. } => Some(*index),
            Error::Configuration { .. } | Error::Json { .. } | Error::Executor { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
