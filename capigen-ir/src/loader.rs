//! JSON API description loader.
//!
//! This module reads the JSON form of an API description into the
//! [`Ir`] representation and validates it.

use crate::builtins::BuiltinTable;
use crate::error::IrError;
use crate::field::{Count, Field};
use crate::ir::{Ir, Module, ModuleDoc, Registry};
use crate::name::Name;
use crate::types::{
    Alias, BitField, Callback, Definition, EntryKind, EnumCase, Entry, Enumeration, FlagBit,
    Function, Handle, Structure, Union,
};
use crate::validation::validate_ir;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameter name that carries a function's return type.
pub const RETURN_PARAM: &str = "@return";

/// Loads an API description from a JSON string.
///
/// # Arguments
/// * `json` - JSON document content
/// * `builtins` - Native spellings of built-in types
///
/// # Errors
/// Returns `IrError` if the JSON is malformed, an entry is invalid, or the
/// resulting IR fails validation.
pub fn load_ir(json: &str, builtins: &BuiltinTable) -> Result<Ir, IrError> {
    let raw: RawIr = serde_json::from_str(json)?;
    let prefix = raw.prefix.filter(|p| !p.is_empty());

    let mut registry = Registry::new();
    for builtin in builtins.entries() {
        registry.insert(Entry::BuiltIn(builtin))?;
    }

    let mut modules = Vec::with_capacity(raw.modules.len());
    for raw_module in raw.modules {
        let mut module = Module {
            name: raw_module.name,
            is_built_in: raw_module.is_built_in,
            required_modules: raw_module.required_modules,
            declarations: Vec::with_capacity(raw_module.declarations.len()),
            doc: raw_module.doc,
        };

        for raw_entry in raw_module.declarations {
            if let RawEntry::Builtin { name } = &raw_entry {
                if builtins.get(name).is_none() {
                    return Err(IrError::UnknownBuiltin { name: name.clone() });
                }
                module.declarations.push(name.clone());
                continue;
            }
            let entry = raw_entry.into_entry(prefix.as_deref())?;
            module.declarations.push(entry.id().to_string());
            registry.insert(entry)?;
        }

        modules.push(module);
    }

    let ir = Ir {
        prefix,
        registry,
        modules,
    };
    validate_ir(&ir)?;
    Ok(ir)
}

/// Loads an API description from a JSON file.
///
/// # Errors
/// Returns `IrError` if reading, parsing, or validation fails.
pub fn load_ir_file(path: &std::path::Path, builtins: &BuiltinTable) -> Result<Ir, IrError> {
    let json = std::fs::read_to_string(path)?;
    load_ir(&json, builtins)
}

#[derive(Debug, Deserialize)]
struct RawIr {
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    modules: Vec<RawModule>,
}

#[derive(Debug, Deserialize)]
struct RawModule {
    name: String,
    #[serde(default)]
    is_built_in: bool,
    #[serde(default)]
    required_modules: Vec<String>,
    #[serde(default)]
    declarations: Vec<RawEntry>,
    #[serde(default)]
    doc: Option<ModuleDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawEntry {
    Builtin {
        name: String,
    },
    Alias {
        name: String,
        alias_of: String,
        #[serde(default)]
        is_extension: bool,
    },
    Definition {
        name: String,
        value: Value,
        #[serde(default)]
        is_extension: bool,
    },
    Handle {
        name: String,
        #[serde(default)]
        is_extension: bool,
    },
    Enumeration {
        name: String,
        cases: Map<String, Value>,
        #[serde(default)]
        is_extension: bool,
    },
    BitField {
        name: String,
        bits: Map<String, Value>,
        #[serde(default)]
        is_extension: bool,
    },
    Structure {
        name: String,
        #[serde(default)]
        fields: Vec<RawField>,
        #[serde(default)]
        is_extension: bool,
    },
    Union {
        name: String,
        #[serde(default)]
        variants: Vec<RawField>,
        #[serde(default)]
        is_extension: bool,
    },
    Function {
        name: String,
        #[serde(default)]
        parameters: Vec<RawField>,
        #[serde(default)]
        is_device_command: bool,
        #[serde(default)]
        is_extension: bool,
    },
    Callback {
        name: String,
        #[serde(default)]
        parameters: Vec<RawField>,
        #[serde(default)]
        is_extension: bool,
    },
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    type_id: String,
    #[serde(default)]
    by_ref: bool,
    #[serde(default)]
    by_mut: bool,
    #[serde(default)]
    count: Option<RawCount>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCount {
    Fixed(u32),
    Dynamic(String),
}

impl RawEntry {
    fn into_entry(self, prefix: Option<&str>) -> Result<Entry, IrError> {
        let entry = match self {
            Self::Builtin { name } => {
                return Err(IrError::invalid_value(name, "built-in types are not converted"));
            }
            Self::Alias {
                name,
                alias_of,
                is_extension,
            } => Entry::Alias(Alias {
                id: EntryKind::Alias.make_id(&name),
                name: make_name(prefix, &name, is_extension),
                alias_of,
            }),
            Self::Definition {
                name,
                value,
                is_extension,
            } => {
                let id = EntryKind::Definition.make_id(&name);
                let value = literal(&id, &value)?;
                Entry::Definition(Definition {
                    name: make_name(prefix, &name, is_extension),
                    id,
                    value,
                })
            }
            Self::Handle { name, is_extension } => Entry::Handle(Handle {
                id: EntryKind::Handle.make_id(&name),
                name: make_name(prefix, &name, is_extension),
            }),
            Self::Enumeration {
                name,
                cases,
                is_extension,
            } => {
                let id = EntryKind::Enumeration.make_id(&name);
                let cases = cases
                    .into_iter()
                    .map(|(case, value)| {
                        let value = value.as_i64().ok_or_else(|| {
                            IrError::invalid_value(&id, format!("case '{case}' is not an integer"))
                        })?;
                        Ok(EnumCase {
                            name: Name::new(&case),
                            value,
                        })
                    })
                    .collect::<Result<Vec<_>, IrError>>()?;
                Entry::Enumeration(Enumeration {
                    name: make_name(prefix, &name, is_extension),
                    id,
                    cases,
                })
            }
            Self::BitField {
                name,
                bits,
                is_extension,
            } => {
                let id = EntryKind::BitField.make_id(&name);
                let bits = bits
                    .into_iter()
                    .map(|(bit, index)| {
                        let index = index
                            .as_u64()
                            .and_then(|i| u32::try_from(i).ok())
                            .ok_or_else(|| {
                                IrError::invalid_value(
                                    &id,
                                    format!("bit '{bit}' has no valid index"),
                                )
                            })?;
                        Ok(FlagBit {
                            name: Name::new(&bit),
                            index,
                        })
                    })
                    .collect::<Result<Vec<_>, IrError>>()?;
                Entry::BitField(BitField {
                    name: make_name(prefix, &name, is_extension),
                    id,
                    bits,
                })
            }
            Self::Structure {
                name,
                fields,
                is_extension,
            } => Entry::Structure(Structure {
                id: EntryKind::Structure.make_id(&name),
                name: make_name(prefix, &name, is_extension),
                fields: fields.into_iter().map(RawField::into_field).collect(),
            }),
            Self::Union {
                name,
                variants,
                is_extension,
            } => Entry::Union(Union {
                id: EntryKind::Union.make_id(&name),
                name: make_name(prefix, &name, is_extension),
                variants: variants.into_iter().map(RawField::into_field).collect(),
            }),
            Self::Function {
                name,
                parameters,
                is_device_command,
                is_extension,
            } => {
                let (params, return_type) = split_return(parameters);
                Entry::Function(Function {
                    id: EntryKind::Function.make_id(&name),
                    name: make_name(prefix, &name, is_extension),
                    params,
                    return_type,
                    is_device_command,
                })
            }
            Self::Callback {
                name,
                parameters,
                is_extension,
            } => {
                let (params, return_type) = split_return(parameters);
                Entry::Callback(Callback {
                    id: EntryKind::Callback.make_id(&name),
                    name: make_name(prefix, &name, is_extension),
                    params,
                    return_type,
                })
            }
        };
        Ok(entry)
    }
}

impl RawField {
    fn into_field(self) -> Field {
        Field {
            name: Name::new(&self.name),
            type_id: self.type_id,
            by_ref: self.by_ref,
            by_mut: self.by_mut,
            count: self.count.map(|c| match c {
                RawCount::Fixed(n) => Count::Fixed(n),
                RawCount::Dynamic(s) => Count::Dynamic(s),
            }),
        }
    }
}

fn make_name(prefix: Option<&str>, name: &str, is_extension: bool) -> Name {
    let name = match prefix {
        Some(prefix) => Name::with_prefix(prefix, name),
        None => Name::new(name),
    };
    if is_extension { name.extend("ext") } else { name }
}

fn literal(id: &str, value: &Value) -> Result<String, IrError> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        _ => Err(IrError::invalid_value(id, "definition value must be a number or string")),
    }
}

fn split_return(parameters: Vec<RawField>) -> (Vec<Field>, Option<String>) {
    let mut return_type = None;
    let mut params = Vec::with_capacity(parameters.len());
    for param in parameters {
        if param.name == RETURN_PARAM {
            return_type = Some(param.type_id);
        } else {
            params.push(param.into_field());
        }
    }
    (params, return_type)
}
