//! Shared fixtures for generator tests.

use crate::config::GeneratorConfig;
use crate::rust::aliases::AliasRegistry;
use crate::rust::declarations::DeclarationEmitter;
use capigen_ir::{BuiltinTable, Ir, Registry, load_ir};

pub(crate) const CORE_JSON: &str = r#"{
    "prefix": "ti",
    "modules": [
        {
            "name": "taichi/taichi_platform.h",
            "is_built_in": true,
            "declarations": [
                { "type": "builtin", "name": "uint32_t" },
                { "type": "builtin", "name": "uint64_t" }
            ]
        },
        {
            "name": "taichi/taichi_core.h",
            "required_modules": ["taichi/taichi_platform.h"],
            "declarations": [
                { "type": "alias", "name": "bool", "alias_of": "uint32_t" },
                { "type": "definition", "name": "null_handle", "value": 0 },
                { "type": "handle", "name": "runtime" },
                { "type": "alias", "name": "runtime_ref", "alias_of": "handle.runtime" },
                { "type": "enumeration", "name": "error",
                  "cases": { "success": 0, "not_supported": -1, "invalid_argument": -4 } },
                { "type": "enumeration", "name": "arch",
                  "cases": { "x64": 0, "arm64": 1, "vulkan": 12 } },
                { "type": "enumeration", "name": "image_dimension",
                  "cases": { "1d": 0, "2d": 1, "1d_array": 3, "cube": 5 } },
                { "type": "enumeration", "name": "color",
                  "cases": { "red": 0, "green": 1, "blue": 2 } },
                { "type": "bit_field", "name": "memory_usage",
                  "bits": { "storage": 0, "uniform": 1, "vertex": 2, "index": 3 } },
                { "type": "structure", "name": "memory_allocate_info", "fields": [
                    { "name": "size", "type": "uint64_t" },
                    { "name": "host_write", "type": "alias.bool" },
                    { "name": "usage", "type": "bit_field.memory_usage" }
                ] },
                { "type": "structure", "name": "nd_shape", "fields": [
                    { "name": "dim_count", "type": "uint32_t" },
                    { "name": "dims", "type": "uint32_t", "count": 16 }
                ] },
                { "type": "union", "name": "argument_value", "variants": [
                    { "name": "i32", "type": "int32_t" },
                    { "name": "f32", "type": "float" },
                    { "name": "shape", "type": "structure.nd_shape" }
                ] },
                { "type": "callback", "name": "on_error", "parameters": [
                    { "name": "error", "type": "enumeration.error" },
                    { "name": "user_data", "type": "void*" }
                ] },
                { "type": "structure", "name": "error_handler", "fields": [
                    { "name": "callback", "type": "callback.on_error" },
                    { "name": "user_data", "type": "void*" }
                ] },
                { "type": "function", "name": "create_runtime", "parameters": [
                    { "name": "@return", "type": "handle.runtime" },
                    { "name": "arch", "type": "enumeration.arch" }
                ] },
                { "type": "function", "name": "get_data", "parameters": [
                    { "name": "data", "type": "uint32_t", "by_mut": true, "count": "len" },
                    { "name": "len", "type": "uint32_t" }
                ] },
                { "type": "function", "name": "launch_kernel", "is_device_command": true,
                  "parameters": [
                    { "name": "runtime", "type": "handle.runtime" },
                    { "name": "arg_count", "type": "uint32_t" },
                    { "name": "args", "type": "union.argument_value", "by_ref": true,
                      "count": "arg_count" }
                ] }
            ],
            "doc": {
                "module_doc": ["Taichi core API."],
                "api_refs": {
                    "function.launch_kernel": ["Launches a kernel on `handle.runtime`."]
                },
                "api_field_refs": {
                    "function.launch_kernel.runtime": "Runtime to launch on.",
                    "enumeration.arch.vulkan": "Vulkan backend.",
                    "bit_field.memory_usage.storage": "Storage buffer.",
                    "structure.memory_allocate_info.size": "Size in bytes."
                }
            }
        },
        {
            "name": "taichi/taichi_vulkan.h",
            "required_modules": ["taichi/taichi_core.h"],
            "declarations": [
                { "type": "structure", "name": "vulkan_runtime_interop_info", "fields": [
                    { "name": "api_version", "type": "uint32_t" }
                ] },
                { "type": "function", "name": "create_vulkan_runtime", "is_extension": true,
                  "parameters": [
                    { "name": "@return", "type": "handle.runtime" },
                    { "name": "api_version", "type": "uint32_t" }
                ] }
            ]
        },
        {
            "name": "taichi/taichi_unity.h",
            "required_modules": ["taichi/taichi_core.h", "unity/IUnityInterface.h"],
            "declarations": [
                { "type": "handle", "name": "native_buffer" }
            ]
        }
    ]
}"#;

pub(crate) fn core_ir() -> Ir {
    load_ir(CORE_JSON, &BuiltinTable::default()).expect("Failed to load fixture")
}

pub(crate) fn core_registry() -> Registry {
    core_ir().registry
}

/// Emits one entry with the default configuration and no module docs.
pub(crate) fn emit_one(registry: &Registry, id: &str) -> (String, AliasRegistry) {
    let config = GeneratorConfig::default();
    emit_with(registry, id, &config)
}

pub(crate) fn emit_with(
    registry: &Registry,
    id: &str,
    config: &GeneratorConfig,
) -> (String, AliasRegistry) {
    let emitter = DeclarationEmitter::new(registry, None, config);
    let mut aliases = AliasRegistry::new();
    let entry = registry.resolve(id).expect("entry");
    let output = emitter.emit(entry, &mut aliases).expect("emit");
    (output, aliases)
}
