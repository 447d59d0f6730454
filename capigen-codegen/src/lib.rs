//! # Capigen Codegen
//!
//! Rust FFI binding generation from a declarative C API description.
//!
//! This crate provides:
//! - Type and field projection onto Rust type expressions
//! - Per-kind declaration emission (handles, enums, flags, structs, functions)
//! - Doc comment generation with cross-reference resolution
//! - Per-module file assembly with short-name re-exports

pub mod config;
pub mod error;
pub mod generator;
pub mod rust;

pub use config::{DocMode, GeneratorConfig};
pub use error::CodegenError;
pub use generator::{GeneratedModule, Generator, crate_root};

use capigen_ir::BuiltinTable;

/// Generates bindings for every module of a JSON IR document.
///
/// # Arguments
/// * `json` - IR document
/// * `config` - Generator settings
///
/// # Returns
/// The generated modules, in document order.
///
/// # Errors
/// Returns `CodegenError` if loading, validation, or generation fails.
pub fn generate_from_json(
    json: &str,
    config: GeneratorConfig,
) -> Result<Vec<GeneratedModule>, CodegenError> {
    let ir = capigen_ir::load_ir(json, &BuiltinTable::default())?;
    Generator::with_config(&ir, config).generate()
}

/// Generates bindings from an IR file and writes them to the configured
/// output directory.
///
/// # Arguments
/// * `path` - Path to the IR document
/// * `config` - Generator settings
///
/// # Returns
/// Paths of the files written.
///
/// # Errors
/// Returns `CodegenError` if reading, generation, or writing fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: GeneratorConfig,
) -> Result<Vec<std::path::PathBuf>, CodegenError> {
    let ir = capigen_ir::load_ir_file(path, &BuiltinTable::default())?;
    Generator::with_config(&ir, config).write_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rust::test_support::CORE_JSON;

    #[test]
    fn test_generate_from_json() {
        let generated =
            generate_from_json(CORE_JSON, GeneratorConfig::default()).expect("Failed to generate");
        assert_eq!(generated.len(), 2);
        assert!(generated[0].source.contains("pub struct TiRuntime(pub usize);"));
    }

    #[test]
    fn test_generate_from_json_invalid() {
        let result = generate_from_json("{ not json", GeneratorConfig::default());
        assert!(matches!(result, Err(CodegenError::Ir(_))));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("api.json");
        std::fs::write(&input, CORE_JSON).expect("write input");
        let out = dir.path().join("out");
        let written = generate_from_file(&input, GeneratorConfig::default().output_dir(&out))
            .expect("Failed to generate");
        assert_eq!(written.len(), 2);
        assert!(out.join("taichi_vulkan.rs").exists());
    }
}
