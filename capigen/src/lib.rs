//! # Capigen
//!
//! ABI-compatible Rust bindings from a declarative C API description.
//!
//! The input is a JSON IR listing the modules of a C API and their
//! declarations: handles, enumerations, bit fields, structures, unions,
//! functions and so on. Each non-built-in module becomes one Rust source file
//! with `#[repr]`-annotated types, `extern "C"` function declarations, doc
//! comments with resolved cross-references, and an `aliases` module
//! re-exporting short, prefix-free names.
//!
//! ## Quick Start
//!
//! ```ignore
//! use capigen::prelude::*;
//! use std::path::Path;
//!
//! let ir = load_ir_file(Path::new("c_api/taichi.json"), &BuiltinTable::default())?;
//! let config = GeneratorConfig::default().output_dir("bindings");
//! Generator::with_config(&ir, config).write_all()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`ir`] - IR data model, JSON loading and validation
//! - [`codegen`] - Rust code generation and output

/// IR data model, loading and validation.
pub mod ir {
    pub use capigen_ir::*;
}

/// Rust code generation.
pub mod codegen {
    pub use capigen_codegen::*;
}

/// Commonly used items.
pub mod prelude {
    pub use capigen_codegen::{
        CodegenError, DocMode, GeneratedModule, Generator, GeneratorConfig,
    };
    pub use capigen_ir::{BuiltinTable, Ir, IrError, load_ir, load_ir_file};
}

pub use capigen_codegen::{CodegenError, Generator, GeneratorConfig};
pub use capigen_ir::{BuiltinTable, Ir, load_ir, load_ir_file};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    const API: &str = r#"{
        "prefix": "ti",
        "modules": [
            {
                "name": "taichi/taichi_core.h",
                "declarations": [
                    { "type": "builtin", "name": "uint32_t" },
                    { "type": "handle", "name": "runtime" },
                    { "type": "structure", "name": "runtime_info", "fields": [
                        { "name": "type", "type": "uint32_t" }
                    ] },
                    { "type": "function", "name": "destroy_runtime", "parameters": [
                        { "name": "runtime", "type": "handle.runtime" }
                    ] }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_end_to_end() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("api.json");
        std::fs::write(&input, API).expect("write input");

        let ir = load_ir_file(&input, &BuiltinTable::default()).expect("Failed to load");
        let out = dir.path().join("bindings");
        let written = Generator::with_config(&ir, GeneratorConfig::default().output_dir(&out))
            .write_all()
            .expect("Failed to generate");

        assert_eq!(written, vec![out.join("taichi_core.rs")]);
        let code = std::fs::read_to_string(&written[0]).expect("read output");
        assert!(code.contains("pub struct TiRuntime(pub usize);"));
        assert!(code.contains("  pub r#type: u32,\n"));
        assert!(code.contains("pub fn ti_destroy_runtime(\n  runtime: TiRuntime,\n) -> ();\n"));
        assert!(code.contains("pub use super::TiRuntimeInfo as RuntimeInfo;\n"));
    }
}
