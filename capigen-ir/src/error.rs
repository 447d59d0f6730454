//! Error types for IR loading and validation.

use thiserror::Error;

/// Error type for IR operations.
#[derive(Debug, Error)]
pub enum IrError {
    /// JSON syntax or shape error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two entries share an id.
    #[error("duplicate entry id '{id}'")]
    DuplicateEntry {
        /// Entry id.
        id: String,
    },

    /// A reference names an entry that does not exist.
    #[error("unresolved reference '{reference}' in '{id}'")]
    UnresolvedReference {
        /// Id of the referencing entry.
        id: String,
        /// Referenced id.
        reference: String,
    },

    /// A built-in entry is missing from the built-in table.
    #[error("built-in type '{name}' has no native spelling")]
    UnknownBuiltin {
        /// C spelling.
        name: String,
    },

    /// A value has the wrong shape.
    #[error("invalid value in '{id}': {message}")]
    InvalidValue {
        /// Entry id.
        id: String,
        /// Error message.
        message: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl IrError {
    /// Creates a duplicate entry error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateEntry { id: id.into() }
    }

    /// Creates an unresolved reference error.
    pub fn unresolved(id: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            id: id.into(),
            reference: reference.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
