//! Naming and layout policy tables.
//!
//! These are fixed conventions of the bound API rather than rules that can be
//! derived from the IR. Each table lists every known case explicitly.

use capigen_ir::Name;

/// Field names that must be written as raw identifiers.
pub const RESERVED_FIELD_NAMES: &[&str] = &["type", "i32", "f32"];

/// Raw identifier escape.
pub const RAW_IDENT_PREFIX: &str = "r#";

/// Enumerations whose discriminants are signed.
pub const SIGNED_ENUMS: &[&str] = &["error"];

/// Enumerations whose cases may start with a digit, with the letter that is
/// prepended to make them valid identifiers.
pub const DIGIT_CASE_REWRITES: &[(&str, &str)] = &[("image_dimension", "D")];

/// Structure name suffix marking plain parameter bags that are re-exported
/// under a short alias.
pub const ALIASED_STRUCT_SUFFIX: &str = "Info";

/// Word appended to a bit field name to form its flag-set type.
pub const FLAGS_WORD: &str = "flags";

/// Word appended to every bit name.
pub const BIT_WORD: &str = "bit";

/// Escapes a field name that collides with a reserved word.
#[must_use]
pub fn escape_field_name(name: &str) -> String {
    if RESERVED_FIELD_NAMES.contains(&name) {
        format!("{RAW_IDENT_PREFIX}{name}")
    } else {
        name.to_string()
    }
}

/// Returns the `#[repr]` integer of an enumeration.
#[must_use]
pub fn enum_repr(name: &Name) -> &'static str {
    if SIGNED_ENUMS.contains(&name.to_string().as_str()) {
        "i32"
    } else {
        "u32"
    }
}

/// Returns the prefix for digit-leading cases of an enumeration, if the
/// enumeration has a known rewrite.
#[must_use]
pub fn digit_case_prefix(name: &Name) -> Option<&'static str> {
    let name = name.to_string();
    DIGIT_CASE_REWRITES
        .iter()
        .find(|(family, _)| *family == name)
        .map(|(_, prefix)| *prefix)
}

/// Returns true if a structure type name is eligible for re-export.
#[must_use]
pub fn is_aliased_struct(type_name: &str) -> bool {
    type_name.ends_with(ALIASED_STRUCT_SUFFIX)
}
