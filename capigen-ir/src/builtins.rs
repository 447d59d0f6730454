//! Built-in primitive type table.

use crate::types::BuiltInType;
use std::collections::HashMap;

/// Mapping from C spelling to target-language spelling.
#[derive(Debug, Clone)]
pub struct BuiltinTable {
    types: HashMap<String, String>,
}

impl BuiltinTable {
    /// Creates an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Adds a built-in type.
    #[must_use]
    pub fn with(mut self, c_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.types.insert(c_name.into(), type_name.into());
        self
    }

    /// Looks up the target spelling of a C type.
    #[must_use]
    pub fn get(&self, c_name: &str) -> Option<&str> {
        self.types.get(c_name).map(String::as_str)
    }

    /// Returns every built-in as an IR entry payload.
    pub fn entries(&self) -> impl Iterator<Item = BuiltInType> + '_ {
        self.types.iter().map(|(id, type_name)| BuiltInType {
            id: id.clone(),
            type_name: type_name.clone(),
        })
    }

    /// Returns the number of built-in types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for BuiltinTable {
    /// C fixed-width and pointer types mapped onto Rust and `std::os::raw`.
    fn default() -> Self {
        Self::empty()
            .with("uint64_t", "u64")
            .with("int64_t", "i64")
            .with("uint32_t", "u32")
            .with("int32_t", "i32")
            .with("uint16_t", "u16")
            .with("int16_t", "i16")
            .with("uint8_t", "u8")
            .with("int8_t", "i8")
            .with("double", "f64")
            .with("float", "f32")
            .with("const char*", "*const c_char")
            .with("const char**", "*const *const c_char")
            .with("void*", "*mut c_void")
            .with("const void*", "*const c_void")
            .with("char", "c_char")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = BuiltinTable::default();
        assert_eq!(table.len(), 15);
        assert_eq!(table.get("uint32_t"), Some("u32"));
        assert_eq!(table.get("const char**"), Some("*const *const c_char"));
        assert_eq!(table.get("size_t"), None);
    }

    #[test]
    fn test_custom_table() {
        let table = BuiltinTable::empty().with("size_t", "usize");
        assert_eq!(table.get("size_t"), Some("usize"));
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "size_t");
    }
}
