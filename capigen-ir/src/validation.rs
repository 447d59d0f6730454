//! IR validation utilities.
//!
//! This module checks that a loaded API description is internally
//! consistent before any code is generated from it.

use crate::error::IrError;
use crate::field::{Count, Field};
use crate::ir::{Ir, Registry};
use crate::types::{BitField, Entry, Enumeration};
use std::collections::HashSet;

/// Widest bit index a flag set may use.
pub const MAX_BIT_INDEX: u32 = 31;

/// Validates a loaded IR for consistency.
///
/// # Arguments
/// * `ir` - The IR to validate
///
/// # Returns
/// Ok(()) if valid, or IrError describing the first issue found.
///
/// # Errors
/// Returns `IrError` if validation fails.
pub fn validate_ir(ir: &Ir) -> Result<(), IrError> {
    validate_modules(ir)?;
    for entry in ir.registry.iter() {
        validate_entry(&ir.registry, entry)?;
    }
    Ok(())
}

/// Validates that every declared id resolves.
fn validate_modules(ir: &Ir) -> Result<(), IrError> {
    for module in &ir.modules {
        for id in &module.declarations {
            if !ir.registry.contains(id) {
                return Err(IrError::unresolved(&module.name, id));
            }
        }
    }
    Ok(())
}

/// Validates a single entry.
fn validate_entry(registry: &Registry, entry: &Entry) -> Result<(), IrError> {
    match entry {
        Entry::Alias(alias) => validate_reference(registry, &alias.id, &alias.alias_of),
        Entry::Enumeration(e) => validate_enum(e),
        Entry::BitField(b) => validate_bit_field(b),
        Entry::Structure(_) | Entry::Union(_) => validate_fields(registry, entry.id(), entry.fields()),
        Entry::Function(f) => {
            validate_fields(registry, &f.id, &f.params)?;
            match &f.return_type {
                Some(ty) => validate_reference(registry, &f.id, ty),
                None => Ok(()),
            }
        }
        Entry::Callback(c) => {
            validate_fields(registry, &c.id, &c.params)?;
            match &c.return_type {
                Some(ty) => validate_reference(registry, &c.id, ty),
                None => Ok(()),
            }
        }
        Entry::BuiltIn(_) | Entry::Definition(_) | Entry::Handle(_) => Ok(()),
    }
}

fn validate_reference(registry: &Registry, id: &str, reference: &str) -> Result<(), IrError> {
    if registry.contains(reference) {
        Ok(())
    } else {
        Err(IrError::unresolved(id, reference))
    }
}

/// Validates field type references and dynamic counts.
fn validate_fields(registry: &Registry, id: &str, fields: &[Field]) -> Result<(), IrError> {
    let names: HashSet<String> = fields.iter().map(|f| f.name.to_string()).collect();

    for field in fields {
        validate_reference(registry, id, &field.type_id)?;

        if let Some(Count::Dynamic(len)) = &field.count {
            if !names.contains(len) {
                return Err(IrError::validation(format!(
                    "count '{}' of field '{}' in '{}' is not a sibling field",
                    len, field.name, id
                )));
            }
        }
    }

    Ok(())
}

/// Validates an enumeration.
fn validate_enum(enum_def: &Enumeration) -> Result<(), IrError> {
    let mut seen_names = HashSet::new();

    for case in &enum_def.cases {
        if !seen_names.insert(case.name.to_string()) {
            return Err(IrError::validation(format!(
                "Duplicate case name '{}' in enumeration '{}'",
                case.name, enum_def.id
            )));
        }
    }

    Ok(())
}

/// Validates a bit field.
fn validate_bit_field(bit_field: &BitField) -> Result<(), IrError> {
    let mut seen_indices = HashSet::new();

    for bit in &bit_field.bits {
        if bit.index > MAX_BIT_INDEX {
            return Err(IrError::validation(format!(
                "Bit index {} exceeds maximum {} in '{}'",
                bit.index, MAX_BIT_INDEX, bit_field.id
            )));
        }

        if !seen_indices.insert(bit.index) {
            return Err(IrError::validation(format!(
                "Duplicate bit index {} in '{}'",
                bit.index, bit_field.id
            )));
        }
    }

    Ok(())
}
