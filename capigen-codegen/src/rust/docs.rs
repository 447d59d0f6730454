//! Documentation comments and cross-reference resolution.
//!
//! Doc text may mention other declarations with inline markers such as
//! `` `structure.memory_allocate_info` `` or
//! `` `enumeration.arch.vulkan` ``. Markers are rewritten into the Rust
//! spelling of the referenced item, linked to its heading when possible.
//! Resolution failures are never fatal: the raw marker text is kept and a
//! warning is logged.

use crate::error::CodegenError;
use crate::rust::naming::{bit_ident, declared_ident, enum_case_ident, flags_ident, type_ident};
use capigen_ir::{Entry, ModuleDoc, Registry};
use regex::Regex;
use std::sync::LazyLock;

static SYMBOL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`(\w+\.\w+(?:\.\w+)?)`").expect("symbol pattern is a valid regex")
});

/// A cross-reference after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSymbol {
    /// Rendered name.
    pub name: String,
    /// Heading anchor, for whole-entry references.
    pub href: Option<String>,
}

impl ResolvedSymbol {
    fn raw(symbol: &str) -> Self {
        Self {
            name: symbol.to_string(),
            href: None,
        }
    }

    /// Renders the symbol as inline markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        match &self.href {
            Some(href) => format!("[`{}`]({})", self.name, href),
            None => format!("`{}`", self.name),
        }
    }
}

/// Resolves cross-references and builds doc comment lines for one module.
#[derive(Debug, Clone, Copy)]
pub struct DocResolver<'a> {
    registry: &'a Registry,
    doc: Option<&'a ModuleDoc>,
}

impl<'a> DocResolver<'a> {
    /// Creates a resolver over `registry` using the module's documentation.
    #[must_use]
    pub fn new(registry: &'a Registry, doc: Option<&'a ModuleDoc>) -> Self {
        Self { registry, doc }
    }

    /// Returns the heading of an entry, for example ``Structure `TiFooInfo` ``.
    ///
    /// # Errors
    /// Returns `CodegenError::NoDeclarationNeeded` for built-in types and
    /// callbacks.
    pub fn title(entry: &Entry) -> Result<String, CodegenError> {
        let mut title = format!("{} `{}`", entry.kind().title(), declared_ident(entry)?);
        if let Entry::Function(f) = entry {
            if f.is_device_command {
                title.push_str(" (Device Command)");
            }
        }
        Ok(title)
    }

    /// Converts a heading into its anchor link.
    #[must_use]
    pub fn anchor(title: &str) -> String {
        let slug: String = title
            .to_lowercase()
            .replace(' ', "-")
            .chars()
            .filter(|c| !matches!(c, '`' | '(' | ')'))
            .collect();
        format!("#{slug}")
    }

    /// Renders a member of an entry: enumeration case, flag, field or
    /// parameter. Returns `None` if the entry has no such member.
    #[must_use]
    pub fn member_name(entry: &Entry, member: &str) -> Option<String> {
        match entry {
            Entry::Enumeration(e) => {
                let case = e.get_case(member)?;
                let ident = enum_case_ident(e, &case.name).ok()?;
                Some(format!("{}::{}", type_ident(&e.name), ident))
            }
            Entry::BitField(b) => {
                let bit = b.get_bit(member)?;
                Some(format!("{}::{}", flags_ident(&b.name), bit_ident(&bit.name)))
            }
            Entry::Structure(_) | Entry::Union(_) | Entry::Function(_) | Entry::Callback(_) => entry
                .fields()
                .iter()
                .map(|f| f.name.to_string())
                .find(|name| name == member),
            _ => None,
        }
    }

    /// Resolves a dotted symbol such as `handle.runtime` or
    /// `structure.nd_shape.dims`.
    ///
    /// Unresolvable symbols come back unchanged, without a link.
    #[must_use]
    pub fn resolve_symbol(&self, symbol: &str) -> ResolvedSymbol {
        let Some(first_dot) = symbol.find('.') else {
            tracing::warn!("Unable to resolve symbol {}", symbol);
            return ResolvedSymbol::raw(symbol);
        };
        let (id, member) = match symbol[first_dot + 1..].find('.') {
            Some(offset) => {
                let second_dot = first_dot + 1 + offset;
                (&symbol[..second_dot], Some(&symbol[second_dot + 1..]))
            }
            None => (symbol, None),
        };

        let Some(entry) = self.registry.resolve(id) else {
            tracing::warn!("Unable to resolve symbol {}", symbol);
            return ResolvedSymbol::raw(symbol);
        };

        let resolved = match member {
            Some(member) => Self::member_name(entry, member).map(|name| ResolvedSymbol {
                name,
                href: None,
            }),
            None => match (declared_ident(entry), Self::title(entry)) {
                (Ok(name), Ok(title)) => Some(ResolvedSymbol {
                    name,
                    href: Some(Self::anchor(&title)),
                }),
                _ => None,
            },
        };

        resolved.unwrap_or_else(|| {
            tracing::warn!("Unable to resolve symbol {}", symbol);
            ResolvedSymbol::raw(symbol)
        })
    }

    /// Rewrites every inline marker of a doc line.
    #[must_use]
    pub fn resolve_inline_symbols(&self, line: &str) -> String {
        let mut symbols: Vec<&str> = Vec::new();
        for caps in SYMBOL_PATTERN.captures_iter(line) {
            if let Some(m) = caps.get(1) {
                if !symbols.contains(&m.as_str()) {
                    symbols.push(m.as_str());
                }
            }
        }

        let mut output = line.to_string();
        for symbol in symbols {
            let resolved = self.resolve_symbol(symbol);
            output = output.replace(&format!("`{symbol}`"), &resolved.to_markdown());
        }
        output
    }

    /// Module-level inner doc lines.
    #[must_use]
    pub fn module_doc(&self) -> Vec<String> {
        self.doc
            .map(|doc| {
                doc.module_doc
                    .iter()
                    .map(|line| format!("//! {}", self.resolve_inline_symbols(line)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Heading and body doc lines of an entry.
    ///
    /// # Errors
    /// Same as [`DocResolver::title`].
    pub fn api_ref(&self, entry: &Entry) -> Result<Vec<String>, CodegenError> {
        let mut lines = vec![format!("/// {}", Self::title(entry)?)];
        if let Some(refs) = self.doc.and_then(|doc| doc.api_refs.get(entry.id())) {
            lines.extend(
                refs.iter()
                    .map(|line| format!("/// {}", self.resolve_inline_symbols(line))),
            );
        }
        Ok(lines)
    }

    /// Doc line of a member, indented for a declaration body.
    #[must_use]
    pub fn api_field_ref(&self, entry: &Entry, member: &str) -> Option<String> {
        self.field_doc(entry, member)
            .map(|text| format!("  /// {text}"))
    }

    /// Doc line of a function parameter, as a list item.
    #[must_use]
    pub fn api_param_ref(&self, entry: &Entry, param: &str) -> Option<String> {
        self.field_doc(entry, param)
            .map(|text| format!("/// - `{param}`: {text}"))
    }

    fn field_doc(&self, entry: &Entry, member: &str) -> Option<String> {
        let key = format!("{}.{}", entry.id(), member);
        self.doc
            .and_then(|doc| doc.api_field_refs.get(&key))
            .map(|text| self.resolve_inline_symbols(text))
    }
}
