//! Module assembly and output.

use crate::config::{DocMode, GeneratorConfig};
use crate::error::CodegenError;
use crate::rust::{AliasRegistry, DeclarationEmitter, DocResolver};
use capigen_ir::{Ir, Module};
use std::fs;
use std::path::{Path, PathBuf};

/// Lines written at the top of every generated module.
const PRAGMAS: &str = "#[allow(unused_imports)]\n\
                       use std::os::raw::{c_void, c_char};\n\
                       #[allow(unused_imports)]\n\
                       use bitflags::bitflags;\n";

/// File name of the optional crate root.
pub const CRATE_ROOT_FILE: &str = "lib.rs";

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Module path it was generated from.
    pub module: String,
    /// Rust module name.
    pub stem: String,
    /// Output file name, `<stem>.rs`.
    pub file_name: String,
    /// Generated source.
    pub source: String,
}

/// Main code generator.
pub struct Generator<'a> {
    ir: &'a Ir,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with the default configuration.
    #[must_use]
    pub fn new(ir: &'a Ir) -> Self {
        Self::with_config(ir, GeneratorConfig::default())
    }

    /// Creates a new generator with an explicit configuration.
    #[must_use]
    pub fn with_config(ir: &'a Ir, config: GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the source of one module.
    ///
    /// Returns `None` for built-in modules, and for modules requiring a
    /// module outside the API namespace. Nothing is emitted for the latter,
    /// not even a partial file.
    ///
    /// # Errors
    /// Returns `CodegenError` if any declaration cannot be projected.
    pub fn generate_module(&self, module: &Module) -> Result<Option<String>, CodegenError> {
        if module.is_built_in {
            return Ok(None);
        }

        let mut imports = Vec::new();
        for required in &module.required_modules {
            let Some(stem) = self.config.module_stem(required) else {
                tracing::warn!(
                    "module '{}' requires '{}' which is outside '{}', skipped",
                    module.name,
                    required,
                    self.config.namespace
                );
                return Ok(None);
            };
            let is_built_in = self
                .ir
                .get_module(required)
                .is_some_and(|m| m.is_built_in);
            if !is_built_in {
                imports.push(format!("use crate::{stem}::*;\n"));
            }
        }

        let doc = module.doc.as_ref();
        let emitter = DeclarationEmitter::new(&self.ir.registry, doc, &self.config);
        let mut aliases = AliasRegistry::new();
        let mut output = String::new();

        if self.config.doc_mode == DocMode::ApiReference {
            for line in DocResolver::new(&self.ir.registry, doc).module_doc() {
                output.push_str(&line);
                output.push('\n');
            }
        }
        output.push_str(PRAGMAS);
        for import in imports {
            output.push_str(&import);
        }

        for id in &module.declarations {
            let entry = self
                .ir
                .registry
                .resolve(id)
                .ok_or_else(|| CodegenError::unknown_entry(id))?;
            let block = emitter.emit(entry, &mut aliases)?;
            if block.is_empty() {
                continue;
            }
            output.push('\n');
            output.push_str(&block);
        }

        output.push('\n');
        output.push_str(&aliases.render());

        Ok(Some(output))
    }

    /// Generates every module that produces a file, in IR order.
    ///
    /// # Errors
    /// Returns `CodegenError` if any module fails to generate.
    pub fn generate(&self) -> Result<Vec<GeneratedModule>, CodegenError> {
        let mut generated = Vec::new();
        for module in &self.ir.modules {
            if module.is_built_in {
                tracing::debug!("skipping built-in module '{}'", module.name);
                continue;
            }
            let Some(stem) = self.config.module_stem(&module.name) else {
                tracing::warn!(
                    "module '{}' is outside '{}', skipped",
                    module.name,
                    self.config.namespace
                );
                continue;
            };

            tracing::info!("processing module '{}'", module.name);
            if let Some(source) = self.generate_module(module)? {
                generated.push(GeneratedModule {
                    module: module.name.clone(),
                    stem: stem.to_string(),
                    file_name: format!("{stem}.rs"),
                    source,
                });
            }
        }
        Ok(generated)
    }

    /// Generates and writes every module to the configured output directory.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails.
    pub fn write_all(&self) -> Result<Vec<PathBuf>, CodegenError> {
        self.write_to(&self.config.output_dir)
    }

    /// Generates and writes every module to `dir`, returning the paths
    /// written.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
        let generated = self.generate()?;
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(generated.len() + 1);
        for module in &generated {
            let path = dir.join(&module.file_name);
            fs::write(&path, &module.source)?;
            tracing::debug!("wrote {}", path.display());
            written.push(path);
        }

        if self.config.emit_crate_root {
            let path = dir.join(CRATE_ROOT_FILE);
            fs::write(&path, crate_root(&generated))?;
            written.push(path);
        }

        Ok(written)
    }
}

/// Renders a crate root declaring every generated module.
#[must_use]
pub fn crate_root(modules: &[GeneratedModule]) -> String {
    let mut output = String::new();
    for module in modules {
        output.push_str(&format!("pub mod {};\n", module.stem));
    }
    output
}
