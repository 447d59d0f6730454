//! Structure and union code generation.

use crate::error::CodegenError;
use crate::rust::aliases::AliasRegistry;
use crate::rust::declarations::DeclarationEmitter;
use crate::rust::fields::project_field;
use crate::rust::naming::{alias_key, type_ident};
use crate::rust::policy;
use capigen_ir::{Entry, Field, Structure, Union};

impl DeclarationEmitter<'_> {
    /// Generates a C-layout structure.
    ///
    /// Only `...Info` parameter structures get a short alias.
    pub(crate) fn emit_struct(
        &self,
        entry: &Entry,
        structure: &Structure,
        aliases: &mut AliasRegistry,
    ) -> Result<String, CodegenError> {
        let ty_name = type_ident(&structure.name);
        if policy::is_aliased_struct(&ty_name) {
            aliases.register(alias_key(entry)?, ty_name.clone());
        }
        self.emit_record(entry, "struct", &ty_name, &structure.fields)
    }

    /// Generates a C-layout union.
    pub(crate) fn emit_union(
        &self,
        entry: &Entry,
        union: &Union,
        aliases: &mut AliasRegistry,
    ) -> Result<String, CodegenError> {
        let ty_name = type_ident(&union.name);
        aliases.register(alias_key(entry)?, ty_name.clone());
        self.emit_record(entry, "union", &ty_name, &union.variants)
    }

    fn emit_record(
        &self,
        entry: &Entry,
        keyword: &str,
        ty_name: &str,
        fields: &[Field],
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.push_marker(&mut output, entry);
        self.push_api_ref(&mut output, entry)?;

        output.push_str("#[repr(C)]\n");
        output.push_str("#[derive(Clone, Copy)]\n");
        output.push_str(&format!("pub {keyword} {ty_name} {{\n"));
        for field in fields {
            self.push_member_doc(&mut output, entry, &field.name.to_string());
            output.push_str(&format!("  pub {},\n", project_field(&self.types, field)?));
        }
        output.push_str("}\n");

        Ok(output)
    }
}
