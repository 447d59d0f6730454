//! Enumeration and bit field code generation.

use crate::error::CodegenError;
use crate::rust::aliases::AliasRegistry;
use crate::rust::declarations::DeclarationEmitter;
use crate::rust::naming::{alias_key, bit_ident, enum_case_ident, flags_ident, type_ident};
use crate::rust::policy;
use capigen_ir::{BitField, Entry, Enumeration};

impl DeclarationEmitter<'_> {
    /// Generates an enumeration with its discriminants written verbatim.
    pub(crate) fn emit_enum(
        &self,
        entry: &Entry,
        enumeration: &Enumeration,
        aliases: &mut AliasRegistry,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.push_marker(&mut output, entry);
        self.push_api_ref(&mut output, entry)?;

        let ty_name = type_ident(&enumeration.name);
        aliases.register(alias_key(entry)?, ty_name.clone());

        output.push_str(&format!("#[repr({})]\n", policy::enum_repr(&enumeration.name)));
        output.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq)]\n");
        output.push_str(&format!("pub enum {ty_name} {{\n"));
        for case in &enumeration.cases {
            let ident = enum_case_ident(enumeration, &case.name)?;
            self.push_member_doc(&mut output, entry, &case.name.to_string());
            output.push_str(&format!("  {} = {},\n", ident, case.value));
        }
        output.push_str("}\n");

        Ok(output)
    }

    /// Generates a `bitflags!` set where bit `k` is written as `1 << k`.
    pub(crate) fn emit_bit_field(
        &self,
        entry: &Entry,
        bit_field: &BitField,
        aliases: &mut AliasRegistry,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.push_marker(&mut output, entry);

        let ty_name = flags_ident(&bit_field.name);
        aliases.register(alias_key(entry)?, ty_name.clone());

        output.push_str("bitflags! {\n");
        self.push_api_ref(&mut output, entry)?;
        output.push_str("#[repr(transparent)]\n");
        output.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]\n");
        output.push_str(&format!("pub struct {ty_name}: u32 {{\n"));
        for bit in &bit_field.bits {
            self.push_member_doc(&mut output, entry, &bit.name.to_string());
            output.push_str(&format!(
                "  const {} = 1 << {};\n",
                bit_ident(&bit.name),
                bit.index
            ));
        }
        output.push_str("}\n");
        output.push_str("}\n");

        Ok(output)
    }
}
