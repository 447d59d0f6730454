//! Identifier spelling at each emission site.

use crate::error::CodegenError;
use crate::rust::policy;
use capigen_ir::{Entry, Enumeration, Name};

/// Spelling of a type declared from `name`.
#[must_use]
pub fn type_ident(name: &Name) -> String {
    name.upper_camel_case()
}

/// Spelling of the flag-set type of a bit field.
#[must_use]
pub fn flags_ident(name: &Name) -> String {
    name.extend(policy::FLAGS_WORD).upper_camel_case()
}

/// Spelling of a constant.
#[must_use]
pub fn const_ident(name: &Name) -> String {
    name.screaming_snake_case()
}

/// Spelling of a function.
#[must_use]
pub fn fn_ident(name: &Name) -> String {
    name.snake_case()
}

/// Spelling of a flag inside its flag set.
#[must_use]
pub fn bit_ident(bit: &Name) -> String {
    bit.extend(policy::BIT_WORD).screaming_snake_case()
}

/// Spelling of an enumeration case.
///
/// # Errors
/// Returns `CodegenError::UnsupportedCaseName` if the case starts with a
/// digit and the enumeration has no rewrite rule.
pub fn enum_case_ident(enumeration: &Enumeration, case: &Name) -> Result<String, CodegenError> {
    let starts_with_digit = case
        .screaming_snake_case()
        .starts_with(|c: char| c.is_ascii_digit());
    if !starts_with_digit {
        return Ok(case.upper_camel_case());
    }
    match policy::digit_case_prefix(&enumeration.name) {
        Some(prefix) => Ok(format!("{prefix}{}", case.upper_camel_case())),
        None => Err(CodegenError::unsupported_case(&enumeration.id, case.to_string())),
    }
}

/// Returns the identifier an entry is declared under.
///
/// # Errors
/// Returns `CodegenError::NoDeclarationNeeded` for built-in types and
/// callbacks, which are never declared on their own.
pub fn declared_ident(entry: &Entry) -> Result<String, CodegenError> {
    match entry {
        Entry::Alias(x) => Ok(type_ident(&x.name)),
        Entry::Handle(x) => Ok(type_ident(&x.name)),
        Entry::Enumeration(x) => Ok(type_ident(&x.name)),
        Entry::Structure(x) => Ok(type_ident(&x.name)),
        Entry::Union(x) => Ok(type_ident(&x.name)),
        Entry::BitField(x) => Ok(flags_ident(&x.name)),
        Entry::Definition(x) => Ok(const_ident(&x.name)),
        Entry::Function(x) => Ok(fn_ident(&x.name)),
        Entry::BuiltIn(_) | Entry::Callback(_) => {
            Err(CodegenError::no_declaration(entry.id(), entry.kind()))
        }
    }
}

/// Returns the short re-export key of an entry: its declared identifier
/// spelled without the API prefix.
///
/// # Errors
/// Same as [`declared_ident`].
pub fn alias_key(entry: &Entry) -> Result<String, CodegenError> {
    let stripped = entry.name().map(Name::without_prefix);
    match (entry, stripped) {
        (Entry::BitField(_), Some(name)) => Ok(flags_ident(&name)),
        (Entry::Definition(_), Some(name)) => Ok(const_ident(&name)),
        (Entry::Function(_), Some(name)) => Ok(fn_ident(&name)),
        (Entry::BuiltIn(_) | Entry::Callback(_), _) | (_, None) => {
            Err(CodegenError::no_declaration(entry.id(), entry.kind()))
        }
        (_, Some(name)) => Ok(type_ident(&name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capigen_ir::{BitField, Definition, EnumCase, Function, Handle};

    fn dimension_enum(name: &str) -> Enumeration {
        Enumeration {
            id: format!("enumeration.{name}"),
            name: Name::with_prefix("ti", name),
            cases: vec![EnumCase {
                name: Name::new("2d"),
                value: 1,
            }],
        }
    }

    #[test]
    fn test_enum_case_rewrite() {
        let e = dimension_enum("image_dimension");
        assert_eq!(enum_case_ident(&e, &Name::new("2d")).expect("rewrite"), "D2D");
        assert_eq!(enum_case_ident(&e, &Name::new("1d_array")).expect("rewrite"), "D1DArray");
        assert_eq!(enum_case_ident(&e, &Name::new("cube")).expect("plain"), "Cube");
    }

    #[test]
    fn test_enum_case_unsupported() {
        let e = dimension_enum("texture_kind");
        let result = enum_case_ident(&e, &Name::new("2d"));
        assert!(matches!(result, Err(CodegenError::UnsupportedCaseName { .. })));
    }

    #[test]
    fn test_declared_ident_and_alias_key() {
        let bits = Entry::BitField(BitField {
            id: "bit_field.memory_usage".to_string(),
            name: Name::with_prefix("ti", "memory_usage"),
            bits: Vec::new(),
        });
        assert_eq!(declared_ident(&bits).expect("ident"), "TiMemoryUsageFlags");
        assert_eq!(alias_key(&bits).expect("key"), "MemoryUsageFlags");

        let def = Entry::Definition(Definition {
            id: "definition.null_handle".to_string(),
            name: Name::with_prefix("ti", "null_handle"),
            value: "0".to_string(),
        });
        assert_eq!(declared_ident(&def).expect("ident"), "TI_NULL_HANDLE");
        assert_eq!(alias_key(&def).expect("key"), "NULL_HANDLE");

        let func = Entry::Function(Function {
            id: "function.create_runtime".to_string(),
            name: Name::with_prefix("ti", "create_runtime"),
            params: Vec::new(),
            return_type: None,
            is_device_command: false,
        });
        assert_eq!(declared_ident(&func).expect("ident"), "ti_create_runtime");
        assert_eq!(alias_key(&func).expect("key"), "create_runtime");

        let handle = Entry::Handle(Handle {
            id: "handle.runtime".to_string(),
            name: Name::with_prefix("ti", "runtime"),
        });
        assert_eq!(alias_key(&handle).expect("key"), "Runtime");
    }

    #[test]
    fn test_declared_ident_builtin() {
        let entry = Entry::BuiltIn(capigen_ir::BuiltInType {
            id: "uint32_t".to_string(),
            type_name: "u32".to_string(),
        });
        assert!(matches!(
            declared_ident(&entry),
            Err(CodegenError::NoDeclarationNeeded { .. })
        ));
    }
}
