//! Intermediate representation consumed by the generator.
//!
//! The IR is a flat [`Registry`] of entries keyed by id plus an ordered list
//! of [`Module`]s. Each module lists the ids it declares in emission order.

use crate::error::IrError;
use crate::types::Entry;
use serde::Deserialize;
use std::collections::HashMap;

/// Loaded and validated API description.
#[derive(Debug, Clone, Default)]
pub struct Ir {
    /// API prefix word given to every entry name (for example `ti`).
    pub prefix: Option<String>,
    /// Every entry of every module, keyed by id.
    pub registry: Registry,
    /// Modules in input order.
    pub modules: Vec<Module>,
}

impl Ir {
    /// Looks up a module by its full path.
    #[must_use]
    pub fn get_module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }
}

/// Id-to-entry lookup table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, Entry>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    ///
    /// # Errors
    /// Returns `IrError::DuplicateEntry` if the id is already taken.
    pub fn insert(&mut self, entry: Entry) -> Result<(), IrError> {
        let id = entry.id().to_string();
        if self.entries.contains_key(&id) {
            return Err(IrError::duplicate(id));
        }
        self.entries.insert(id, entry);
        Ok(())
    }

    /// Resolves an id to its entry.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Returns true if the id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }
}

/// One API header.
#[derive(Debug, Clone, Default)]
pub struct Module {
    /// Full module path, for example `taichi/taichi_core.h`.
    pub name: String,
    /// Whether the module only declares built-in types.
    pub is_built_in: bool,
    /// Paths of modules this one depends on.
    pub required_modules: Vec<String>,
    /// Ids of declared entries, in emission order.
    pub declarations: Vec<String>,
    /// Documentation, if any was supplied.
    pub doc: Option<ModuleDoc>,
}

impl Module {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Documentation attached to a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleDoc {
    /// Module-level doc lines.
    #[serde(default)]
    pub module_doc: Vec<String>,
    /// Doc lines per entry id.
    #[serde(default)]
    pub api_refs: HashMap<String, Vec<String>>,
    /// One doc line per `entry_id.member` symbol.
    #[serde(default)]
    pub api_field_refs: HashMap<String, String>,
}
