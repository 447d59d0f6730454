//! Error types for code generation.

use capigen_ir::EntryKind;
use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant other than `Ir` and `Io` means the IR describes a construct
/// the generator has no projection for. These abort the whole run.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IR loading or validation error.
    #[error("IR error: {0}")]
    Ir(#[from] capigen_ir::IrError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry used where a type is required.
    #[error("'{id}' is not a type (found {kind})")]
    NotAType {
        /// Entry id.
        id: String,
        /// Entry kind.
        kind: EntryKind,
    },

    /// Enumeration case that cannot be spelled as an identifier.
    #[error("don't know how to rewrite case '{case}' of '{id}' that starts with a digit")]
    UnsupportedCaseName {
        /// Enumeration id.
        id: String,
        /// Offending case name.
        case: String,
    },

    /// Entry that cannot stand alone as a declaration.
    #[error("'{id}' doesn't need declaration (found {kind})")]
    NoDeclarationNeeded {
        /// Entry id.
        id: String,
        /// Entry kind.
        kind: EntryKind,
    },

    /// Id missing from the registry.
    #[error("unknown entry '{id}'")]
    UnknownEntry {
        /// Entry id.
        id: String,
    },
}

impl CodegenError {
    /// Creates a not-a-type error.
    pub fn not_a_type(id: impl Into<String>, kind: EntryKind) -> Self {
        Self::NotAType {
            id: id.into(),
            kind,
        }
    }

    /// Creates an unsupported case name error.
    pub fn unsupported_case(id: impl Into<String>, case: impl Into<String>) -> Self {
        Self::UnsupportedCaseName {
            id: id.into(),
            case: case.into(),
        }
    }

    /// Creates a no-declaration-needed error.
    pub fn no_declaration(id: impl Into<String>, kind: EntryKind) -> Self {
        Self::NoDeclarationNeeded {
            id: id.into(),
            kind,
        }
    }

    /// Creates an unknown entry error.
    pub fn unknown_entry(id: impl Into<String>) -> Self {
        Self::UnknownEntry { id: id.into() }
    }
}
