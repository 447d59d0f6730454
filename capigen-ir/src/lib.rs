//! # Capigen IR
//!
//! Declarative C API description and JSON loader.
//!
//! This crate provides:
//! - Case-aware identifiers ([`Name`])
//! - Entry definitions for every declaration kind
//! - A registry resolving entry ids to entries
//! - JSON loading and consistency validation

pub mod builtins;
pub mod error;
pub mod field;
pub mod ir;
pub mod loader;
pub mod name;
pub mod types;
pub mod validation;

pub use builtins::BuiltinTable;
pub use error::IrError;
pub use field::{Count, Field};
pub use ir::{Ir, Module, ModuleDoc, Registry};
pub use loader::{load_ir, load_ir_file};
pub use name::Name;
pub use types::{
    Alias, BitField, BuiltInType, Callback, Definition, EnumCase, Entry, EntryKind, Enumeration,
    FlagBit, Function, Handle, Structure, Union,
};
pub use validation::validate_ir;
