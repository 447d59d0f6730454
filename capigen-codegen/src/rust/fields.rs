//! Field projection.

use crate::error::CodegenError;
use crate::rust::policy::escape_field_name;
use crate::rust::types::TypeProjector;
use capigen_ir::Field;

/// Renders a field as `name: Type`.
///
/// Indirection wins over a fixed count: a by-reference field with a count is
/// still a pointer. A dynamic count always yields a pointer.
///
/// # Errors
/// Returns `CodegenError` if the field type cannot be projected.
pub fn project_field(types: &TypeProjector<'_>, field: &Field) -> Result<String, CodegenError> {
    let name = escape_field_name(&field.name.to_string());
    let type_name = types.type_ref(&field.type_id)?;

    if field.is_ptr() {
        let qualifier = if field.by_mut { "mut" } else { "const" };
        Ok(format!("{name}: *{qualifier} {type_name}"))
    } else if let Some(count) = field.fixed_count() {
        Ok(format!("{name}: [{type_name}; {count}]"))
    } else {
        Ok(format!("{name}: {type_name}"))
    }
}
