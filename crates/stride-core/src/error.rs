//! Error types for the Stride Sync chat core.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a [`Catalog`](crate::catalog::Catalog) from its source.
///
/// Load errors are fatal to the chat feature: a host must not enter the chat
/// view until the source is fixed. Retrying without changing the source
/// yields the same error.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The catalog file does not exist.
    #[error("Catalog source not found: {}", .path.display())]
    Missing { path: PathBuf },

    /// The catalog source exists but could not be read.
    #[error("IO error reading catalog: {message}")]
    Io { message: String },

    /// The source is not a `{ "intents": [...] }` document of the expected shape.
    #[error("Malformed catalog: {message}")]
    Malformed { message: String },

    /// An intent declares no questions.
    #[error("Intent #{position}{} has no questions", describe_tag(.tag))]
    EmptyQuestions { position: usize, tag: Option<String> },

    /// An intent declares no responses.
    #[error("Intent #{position}{} has no responses", describe_tag(.tag))]
    EmptyResponses { position: usize, tag: Option<String> },
}

fn describe_tag(tag: &Option<String>) -> String {
    tag.as_ref()
        .map(|t| format!(" ('{}')", t))
        .unwrap_or_default()
}

impl LoadError {
    /// Creates a Malformed error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates an Io error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed {
            message: err.to_string(),
        }
    }
}

/// The shared error type for the Stride Sync crates.
#[derive(Error, Debug)]
pub enum StrideError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Catalog could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StrideError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a catalog load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }
}

/// A type alias for `Result<T, StrideError>`.
pub type Result<T> = std::result::Result<T, StrideError>;
