//! Type projection.
//!
//! Maps IR type references onto Rust type expressions.

use crate::error::CodegenError;
use crate::rust::fields::project_field;
use crate::rust::naming::{flags_ident, type_ident};
use capigen_ir::{Callback, Entry, Registry};

/// Projects IR types onto Rust type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeProjector<'a> {
    registry: &'a Registry,
}

impl<'a> TypeProjector<'a> {
    /// Creates a new type projector.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolves an id to its entry.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownEntry` if the id is not registered.
    pub fn resolve(&self, id: &str) -> Result<&'a Entry, CodegenError> {
        self.registry
            .resolve(id)
            .ok_or_else(|| CodegenError::unknown_entry(id))
    }

    /// Returns the Rust type expression of a type entry.
    ///
    /// # Errors
    /// Returns `CodegenError::NotAType` for definitions and functions.
    pub fn type_name(&self, entry: &Entry) -> Result<String, CodegenError> {
        match entry {
            Entry::BuiltIn(x) => Ok(x.type_name.clone()),
            Entry::Alias(x) => Ok(type_ident(&x.name)),
            Entry::Handle(x) => Ok(type_ident(&x.name)),
            Entry::Enumeration(x) => Ok(type_ident(&x.name)),
            Entry::Structure(x) => Ok(type_ident(&x.name)),
            Entry::Union(x) => Ok(type_ident(&x.name)),
            Entry::BitField(x) => Ok(flags_ident(&x.name)),
            Entry::Callback(x) => self.fn_pointer(x),
            Entry::Definition(_) | Entry::Function(_) => {
                Err(CodegenError::not_a_type(entry.id(), entry.kind()))
            }
        }
    }

    /// Resolves a type id and projects it.
    ///
    /// # Errors
    /// Returns `CodegenError` if the id is unknown or not a type.
    pub fn type_ref(&self, id: &str) -> Result<String, CodegenError> {
        self.type_name(self.resolve(id)?)
    }

    /// Projects an optional return type, `()` when absent.
    ///
    /// # Errors
    /// Returns `CodegenError` if the id is unknown or not a type.
    pub fn return_type(&self, id: Option<&str>) -> Result<String, CodegenError> {
        match id {
            Some(id) => self.type_ref(id),
            None => Ok("()".to_string()),
        }
    }

    /// Nullable function pointer matching a callback signature.
    fn fn_pointer(&self, callback: &Callback) -> Result<String, CodegenError> {
        let params = callback
            .params
            .iter()
            .map(|p| project_field(self, p))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");
        let ret = match &callback.return_type {
            Some(id) => format!(" -> {}", self.type_ref(id)?),
            None => String::new(),
        };
        Ok(format!("Option<unsafe extern \"C\" fn({params}){ret}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capigen_ir::{
        BitField, BuiltInType, Definition, Field, Function, Handle, Name, Structure,
    };

    fn registry() -> Registry {
        let mut registry = Registry::new();
        let entries = vec![
            Entry::BuiltIn(BuiltInType {
                id: "uint32_t".to_string(),
                type_name: "u32".to_string(),
            }),
            Entry::BuiltIn(BuiltInType {
                id: "void*".to_string(),
                type_name: "*mut c_void".to_string(),
            }),
            Entry::Handle(Handle {
                id: "handle.runtime".to_string(),
                name: Name::with_prefix("ti", "runtime"),
            }),
            Entry::BitField(BitField {
                id: "bit_field.memory_usage".to_string(),
                name: Name::with_prefix("ti", "memory_usage"),
                bits: Vec::new(),
            }),
            Entry::Structure(Structure {
                id: "structure.memory_slice".to_string(),
                name: Name::with_prefix("ti", "memory_slice"),
                fields: Vec::new(),
            }),
            Entry::Definition(Definition {
                id: "definition.true".to_string(),
                name: Name::with_prefix("ti", "true"),
                value: "1".to_string(),
            }),
            Entry::Function(Function {
                id: "function.wait".to_string(),
                name: Name::with_prefix("ti", "wait"),
                params: Vec::new(),
                return_type: None,
                is_device_command: false,
            }),
            Entry::Callback(Callback {
                id: "callback.on_event".to_string(),
                name: Name::with_prefix("ti", "on_event"),
                params: vec![
                    Field::new("user_data", "void*"),
                    Field::new("code", "uint32_t"),
                ],
                return_type: Some("uint32_t".to_string()),
            }),
        ];
        for entry in entries {
            registry.insert(entry).expect("insert");
        }
        registry
    }

    #[test]
    fn test_type_names() {
        let registry = registry();
        let types = TypeProjector::new(&registry);
        assert_eq!(types.type_ref("uint32_t").expect("builtin"), "u32");
        assert_eq!(types.type_ref("handle.runtime").expect("handle"), "TiRuntime");
        assert_eq!(
            types.type_ref("bit_field.memory_usage").expect("bits"),
            "TiMemoryUsageFlags"
        );
        assert_eq!(
            types.type_ref("structure.memory_slice").expect("struct"),
            "TiMemorySlice"
        );
    }

    #[test]
    fn test_callback_fn_pointer() {
        let registry = registry();
        let types = TypeProjector::new(&registry);
        assert_eq!(
            types.type_ref("callback.on_event").expect("callback"),
            "Option<unsafe extern \"C\" fn(user_data: *mut c_void, code: u32) -> u32>"
        );
    }

    #[test]
    fn test_not_a_type() {
        let registry = registry();
        let types = TypeProjector::new(&registry);
        let result = types.type_ref("definition.true");
        assert!(matches!(result, Err(CodegenError::NotAType { ref id, .. }) if id == "definition.true"));
        assert!(matches!(
            types.type_ref("function.wait"),
            Err(CodegenError::NotAType { .. })
        ));
    }

    #[test]
    fn test_unknown_and_return() {
        let registry = registry();
        let types = TypeProjector::new(&registry);
        assert!(matches!(
            types.type_ref("handle.missing"),
            Err(CodegenError::UnknownEntry { .. })
        ));
        assert_eq!(types.return_type(None).expect("unit"), "()");
        assert_eq!(types.return_type(Some("handle.runtime")).expect("ret"), "TiRuntime");
    }
}
