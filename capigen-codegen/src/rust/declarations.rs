//! Declaration emission.
//!
//! [`DeclarationEmitter::emit`] maps every IR entry kind onto a block of Rust
//! source. Kind-specific layouts live in sibling modules; this one holds the
//! dispatcher and the small declarations (aliases, constants, handles).

use crate::config::{DocMode, GeneratorConfig};
use crate::error::CodegenError;
use crate::rust::aliases::AliasRegistry;
use crate::rust::docs::DocResolver;
use crate::rust::naming::{alias_key, const_ident, type_ident};
use crate::rust::types::TypeProjector;
use capigen_ir::{Alias, Definition, Entry, Handle, ModuleDoc, Registry};

/// Emits Rust declarations for the entries of one module.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationEmitter<'a> {
    pub(crate) types: TypeProjector<'a>,
    pub(crate) docs: DocResolver<'a>,
    pub(crate) config: &'a GeneratorConfig,
}

impl<'a> DeclarationEmitter<'a> {
    /// Creates a new declaration emitter.
    #[must_use]
    pub fn new(
        registry: &'a Registry,
        doc: Option<&'a ModuleDoc>,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            types: TypeProjector::new(registry),
            docs: DocResolver::new(registry, doc),
            config,
        }
    }

    /// Emits the declaration of `entry`, registering its short alias in
    /// `aliases` where applicable.
    ///
    /// Built-in types and callbacks produce an empty string.
    ///
    /// # Errors
    /// Returns `CodegenError` if the entry references something that cannot
    /// be projected.
    pub fn emit(&self, entry: &Entry, aliases: &mut AliasRegistry) -> Result<String, CodegenError> {
        match entry {
            Entry::BuiltIn(_) | Entry::Callback(_) => Ok(String::new()),
            Entry::Alias(x) => self.emit_alias(entry, x, aliases),
            Entry::Definition(x) => self.emit_definition(entry, x, aliases),
            Entry::Handle(x) => self.emit_handle(entry, x),
            Entry::Enumeration(x) => self.emit_enum(entry, x, aliases),
            Entry::BitField(x) => self.emit_bit_field(entry, x, aliases),
            Entry::Structure(x) => self.emit_struct(entry, x, aliases),
            Entry::Union(x) => self.emit_union(entry, x, aliases),
            Entry::Function(x) => self.emit_function(entry, x, aliases),
        }
    }

    /// Writes the `// <id>` marker line in entry-id mode.
    pub(crate) fn push_marker(&self, output: &mut String, entry: &Entry) {
        if self.config.doc_mode == DocMode::EntryId {
            output.push_str(&format!("// {}\n", entry.id()));
        }
    }

    /// Writes the heading and body doc lines in API-reference mode.
    pub(crate) fn push_api_ref(
        &self,
        output: &mut String,
        entry: &Entry,
    ) -> Result<(), CodegenError> {
        if self.config.doc_mode == DocMode::ApiReference {
            for line in self.docs.api_ref(entry)? {
                output.push_str(&line);
                output.push('\n');
            }
        }
        Ok(())
    }

    /// Writes the doc line of a member in API-reference mode.
    pub(crate) fn push_member_doc(&self, output: &mut String, entry: &Entry, member: &str) {
        if self.config.doc_mode != DocMode::ApiReference {
            return;
        }
        if let Some(line) = self.docs.api_field_ref(entry, member) {
            output.push_str(&line);
            output.push('\n');
        }
    }

    /// Generates a type alias.
    ///
    /// Aliases of handles are not re-exported; handles get hand-written
    /// wrappers under the short name. This is a fixed policy of the bound
    /// API, not something the IR expresses.
    fn emit_alias(
        &self,
        entry: &Entry,
        alias: &Alias,
        aliases: &mut AliasRegistry,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.push_marker(&mut output, entry);
        self.push_api_ref(&mut output, entry)?;

        let ty_name = type_ident(&alias.name);
        let target = self.types.resolve(&alias.alias_of)?;
        if !matches!(target, Entry::Handle(_)) {
            aliases.register(alias_key(entry)?, ty_name.clone());
        }

        output.push_str(&format!(
            "pub type {} = {};\n",
            ty_name,
            self.types.type_name(target)?
        ));
        Ok(output)
    }

    /// Generates a numeric constant.
    fn emit_definition(
        &self,
        entry: &Entry,
        definition: &Definition,
        aliases: &mut AliasRegistry,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.push_marker(&mut output, entry);
        self.push_api_ref(&mut output, entry)?;

        let name = const_ident(&definition.name);
        aliases.register(alias_key(entry)?, name.clone());
        output.push_str(&format!("pub const {}: u32 = {};\n", name, definition.value));
        Ok(output)
    }

    /// Generates an opaque handle newtype. Handles are never re-exported.
    fn emit_handle(&self, entry: &Entry, handle: &Handle) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.push_marker(&mut output, entry);
        self.push_api_ref(&mut output, entry)?;

        let ty_name = type_ident(&handle.name);
        output.push_str("#[repr(transparent)]\n");
        output.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq)]\n");
        output.push_str(&format!("pub struct {ty_name}(pub usize);\n"));
        output.push_str(&format!("impl {ty_name} {{\n"));
        output.push_str("    pub fn null() -> Self {\n");
        output.push_str(&format!("        {ty_name}(0)\n"));
        output.push_str("    }\n");
        output.push_str("}\n");
        Ok(output)
    }
}
