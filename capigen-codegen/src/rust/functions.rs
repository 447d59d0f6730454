//! Foreign function declaration generation.

use crate::config::DocMode;
use crate::error::CodegenError;
use crate::rust::aliases::AliasRegistry;
use crate::rust::declarations::DeclarationEmitter;
use crate::rust::fields::project_field;
use crate::rust::naming::{alias_key, fn_ident};
use capigen_ir::{Entry, Function};

impl DeclarationEmitter<'_> {
    /// Generates an `extern "C"` block linking one function of the library.
    pub(crate) fn emit_function(
        &self,
        entry: &Entry,
        function: &Function,
        aliases: &mut AliasRegistry,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.push_marker(&mut output, entry);

        let fn_name = fn_ident(&function.name);
        aliases.register(alias_key(entry)?, fn_name.clone());

        output.push_str(&format!("#[link(name = \"{}\")]\n", self.config.link_name));
        output.push_str("unsafe extern \"C\" {\n");
        self.push_api_ref(&mut output, entry)?;
        self.push_param_docs(&mut output, entry, function);
        output.push_str(&format!("pub fn {fn_name}(\n"));
        for param in &function.params {
            output.push_str(&format!("  {},\n", project_field(&self.types, param)?));
        }
        output.push_str(&format!(
            ") -> {};\n",
            self.types.return_type(function.return_type.as_deref())?
        ));
        output.push_str("}\n");

        Ok(output)
    }

    fn push_param_docs(&self, output: &mut String, entry: &Entry, function: &Function) {
        if self.config.doc_mode != DocMode::ApiReference {
            return;
        }
        let lines: Vec<String> = function
            .params
            .iter()
            .filter_map(|p| self.docs.api_param_ref(entry, &p.name.to_string()))
            .collect();
        if lines.is_empty() {
            return;
        }
        output.push_str("///\n");
        output.push_str("/// Parameters:\n");
        for line in lines {
            output.push_str(&line);
            output.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{DocMode, GeneratorConfig};
    use crate::rust::aliases::AliasRegistry;
    use crate::rust::declarations::DeclarationEmitter;
    use crate::rust::test_support::{core_ir, core_registry, emit_one, emit_with};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_function() {
        let registry = core_registry();
        let (output, aliases) = emit_one(&registry, "function.create_runtime");
        assert_eq!(
            output,
            "#[link(name = \"taichi_c_api\")]\n\
             unsafe extern \"C\" {\n\
             /// Function `ti_create_runtime`\n\
             pub fn ti_create_runtime(\n  \
               arch: TiArch,\n\
             ) -> TiRuntime;\n\
             }\n"
        );
        assert_eq!(aliases.get("create_runtime"), Some("ti_create_runtime"));
    }

    #[test]
    fn test_void_return_and_mut_pointer() {
        let registry = core_registry();
        let (output, _) = emit_one(&registry, "function.get_data");
        assert!(output.contains("pub fn ti_get_data(\n  data: *mut u32,\n  len: u32,\n) -> ();\n"));
    }

    #[test]
    fn test_const_pointer_param() {
        let registry = core_registry();
        let (output, _) = emit_one(&registry, "function.launch_kernel");
        assert!(output.contains("  args: *const TiArgumentValue,\n"));
        assert!(output.contains("/// Function `ti_launch_kernel` (Device Command)\n"));
    }

    #[test]
    fn test_extension_function_name() {
        let registry = core_registry();
        let (output, aliases) = emit_one(&registry, "function.create_vulkan_runtime");
        assert!(output.contains("pub fn ti_create_vulkan_runtime_ext(\n"));
        assert_eq!(
            aliases.get("create_vulkan_runtime_ext"),
            Some("ti_create_vulkan_runtime_ext")
        );
    }

    #[test]
    fn test_custom_link_name() {
        let registry = core_registry();
        let config = GeneratorConfig::default().link_name("mylib");
        let (output, _) = emit_with(&registry, "function.get_data", &config);
        assert!(output.starts_with("#[link(name = \"mylib\")]\n"));
    }

    #[test]
    fn test_parameter_docs() {
        let ir = core_ir();
        let core = ir.get_module("taichi/taichi_core.h").expect("module");
        let config = GeneratorConfig::default();
        let emitter = DeclarationEmitter::new(&ir.registry, core.doc.as_ref(), &config);
        let entry = ir.registry.resolve("function.launch_kernel").expect("entry");
        let output = emitter.emit(entry, &mut AliasRegistry::new()).expect("emit");
        assert!(output.contains(
            "/// Function `ti_launch_kernel` (Device Command)\n\
             /// Launches a kernel on [`TiRuntime`](#handle-tiruntime).\n\
             ///\n\
             /// Parameters:\n\
             /// - `runtime`: Runtime to launch on.\n\
             pub fn ti_launch_kernel(\n"
        ));
    }

    #[test]
    fn test_entry_id_mode_has_no_docs() {
        let ir = core_ir();
        let core = ir.get_module("taichi/taichi_core.h").expect("module");
        let config = GeneratorConfig::default().doc_mode(DocMode::EntryId);
        let emitter = DeclarationEmitter::new(&ir.registry, core.doc.as_ref(), &config);
        let entry = ir.registry.resolve("function.launch_kernel").expect("entry");
        let output = emitter.emit(entry, &mut AliasRegistry::new()).expect("emit");
        assert!(output.starts_with("// function.launch_kernel\n#[link("));
        assert!(!output.contains("///"));
    }
}
