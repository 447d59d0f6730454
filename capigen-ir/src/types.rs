//! IR entry definitions.
//!
//! This module contains the data structures representing every kind of
//! declaration a C API description can contain: built-in types, aliases,
//! numeric definitions, handles, enumerations, bit fields, structures,
//! unions, functions and callbacks.

use crate::field::Field;
use crate::name::Name;
use std::fmt;

/// One typed item of the API description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Primitive type already known to the target language.
    BuiltIn(BuiltInType),
    /// Type alias.
    Alias(Alias),
    /// Named integer constant.
    Definition(Definition),
    /// Opaque resource handle.
    Handle(Handle),
    /// Enumeration with explicit discriminants.
    Enumeration(Enumeration),
    /// Set of independent bit flags.
    BitField(BitField),
    /// Plain value structure.
    Structure(Structure),
    /// Untagged union.
    Union(Union),
    /// Externally linked function.
    Function(Function),
    /// Function pointer type.
    Callback(Callback),
}

impl Entry {
    /// Returns the entry id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::BuiltIn(x) => &x.id,
            Self::Alias(x) => &x.id,
            Self::Definition(x) => &x.id,
            Self::Handle(x) => &x.id,
            Self::Enumeration(x) => &x.id,
            Self::BitField(x) => &x.id,
            Self::Structure(x) => &x.id,
            Self::Union(x) => &x.id,
            Self::Function(x) => &x.id,
            Self::Callback(x) => &x.id,
        }
    }

    /// Returns the entry name. Built-in types have none.
    #[must_use]
    pub fn name(&self) -> Option<&Name> {
        match self {
            Self::BuiltIn(_) => None,
            Self::Alias(x) => Some(&x.name),
            Self::Definition(x) => Some(&x.name),
            Self::Handle(x) => Some(&x.name),
            Self::Enumeration(x) => Some(&x.name),
            Self::BitField(x) => Some(&x.name),
            Self::Structure(x) => Some(&x.name),
            Self::Union(x) => Some(&x.name),
            Self::Function(x) => Some(&x.name),
            Self::Callback(x) => Some(&x.name),
        }
    }

    /// Returns the entry kind.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::BuiltIn(_) => EntryKind::BuiltIn,
            Self::Alias(_) => EntryKind::Alias,
            Self::Definition(_) => EntryKind::Definition,
            Self::Handle(_) => EntryKind::Handle,
            Self::Enumeration(_) => EntryKind::Enumeration,
            Self::BitField(_) => EntryKind::BitField,
            Self::Structure(_) => EntryKind::Structure,
            Self::Union(_) => EntryKind::Union,
            Self::Function(_) => EntryKind::Function,
            Self::Callback(_) => EntryKind::Callback,
        }
    }

    /// Returns the fields (or parameters) of the entry, if it has any.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        match self {
            Self::Structure(x) => &x.fields,
            Self::Union(x) => &x.variants,
            Self::Function(x) => &x.params,
            Self::Callback(x) => &x.params,
            _ => &[],
        }
    }
}

/// Discriminant of [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Built-in type.
    BuiltIn,
    /// Alias.
    Alias,
    /// Definition.
    Definition,
    /// Handle.
    Handle,
    /// Enumeration.
    Enumeration,
    /// Bit field.
    BitField,
    /// Structure.
    Structure,
    /// Union.
    Union,
    /// Function.
    Function,
    /// Callback.
    Callback,
}

impl EntryKind {
    /// Returns the tag used in entry ids and in the JSON `type` key.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::BuiltIn => "builtin",
            Self::Alias => "alias",
            Self::Definition => "definition",
            Self::Handle => "handle",
            Self::Enumeration => "enumeration",
            Self::BitField => "bit_field",
            Self::Structure => "structure",
            Self::Union => "union",
            Self::Function => "function",
            Self::Callback => "callback",
        }
    }

    /// Returns the kind name used in documentation titles.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BuiltIn => "BuiltInType",
            Self::Alias => "Alias",
            Self::Definition => "Definition",
            Self::Handle => "Handle",
            Self::Enumeration => "Enumeration",
            Self::BitField => "BitField",
            Self::Structure => "Structure",
            Self::Union => "Union",
            Self::Function => "Function",
            Self::Callback => "Callback",
        }
    }

    /// Builds the entry id for a name of this kind.
    #[must_use]
    pub fn make_id(&self, name: &str) -> String {
        format!("{}.{}", self.tag(), name)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Primitive type with a fixed native spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltInType {
    /// C spelling, also used as the id.
    pub id: String,
    /// Target-language spelling.
    pub type_name: String,
}

/// Alias of another type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Entry id.
    pub id: String,
    /// Alias name.
    pub name: Name,
    /// Id of the aliased type.
    pub alias_of: String,
}

/// Named integer constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Entry id.
    pub id: String,
    /// Constant name.
    pub name: Name,
    /// Literal value, emitted verbatim.
    pub value: String,
}

/// Opaque handle type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
    /// Entry id.
    pub id: String,
    /// Handle name.
    pub name: Name,
}

/// Enumeration case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    /// Case name, never prefixed.
    pub name: Name,
    /// Explicit discriminant.
    pub value: i64,
}

/// Enumeration with explicit discriminants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Entry id.
    pub id: String,
    /// Enumeration name.
    pub name: Name,
    /// Cases in declaration order.
    pub cases: Vec<EnumCase>,
}

impl Enumeration {
    /// Looks up a case by its bare snake-case name.
    #[must_use]
    pub fn get_case(&self, name: &str) -> Option<&EnumCase> {
        self.cases.iter().find(|c| c.name.to_string() == name)
    }
}

/// Named bit of a bit field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagBit {
    /// Bit name, never prefixed.
    pub name: Name,
    /// Bit index.
    pub index: u32,
}

/// Set of flags packed into one integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitField {
    /// Entry id.
    pub id: String,
    /// Bit field name.
    pub name: Name,
    /// Bits in declaration order.
    pub bits: Vec<FlagBit>,
}

impl BitField {
    /// Looks up a bit by its bare snake-case name.
    #[must_use]
    pub fn get_bit(&self, name: &str) -> Option<&FlagBit> {
        self.bits.iter().find(|b| b.name.to_string() == name)
    }
}

/// Structure with fields in ABI order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    /// Entry id.
    pub id: String,
    /// Structure name.
    pub name: Name,
    /// Fields in layout order.
    pub fields: Vec<Field>,
}

/// Union with overlapping variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    /// Entry id.
    pub id: String,
    /// Union name.
    pub name: Name,
    /// Variants in declaration order.
    pub variants: Vec<Field>,
}

/// Externally linked function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Entry id.
    pub id: String,
    /// Function name.
    pub name: Name,
    /// Parameters in declaration order.
    pub params: Vec<Field>,
    /// Id of the return type, `None` for no value.
    pub return_type: Option<String>,
    /// Whether the function records a device command.
    pub is_device_command: bool,
}

/// Function pointer type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    /// Entry id.
    pub id: String,
    /// Callback name.
    pub name: Name,
    /// Parameters in declaration order.
    pub params: Vec<Field>,
    /// Id of the return type, `None` for no value.
    pub return_type: Option<String>,
}
