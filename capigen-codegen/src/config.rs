//! Generator configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// How declarations are annotated in the emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocMode {
    /// Doc comments with titles and resolved cross-references.
    #[default]
    ApiReference,
    /// A single `// <entry id>` line per declaration.
    EntryId,
}

/// Settings that tie the generator to one API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Module path prefix of the API's own modules.
    pub namespace: String,
    /// Extension stripped from module paths.
    pub header_extension: String,
    /// Library linked by every function declaration.
    pub link_name: String,
    /// Directory generated files are written to.
    pub output_dir: PathBuf,
    /// Annotation style.
    pub doc_mode: DocMode,
    /// Whether to also write a `lib.rs` declaring every generated module.
    pub emit_crate_root: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: "taichi/".to_string(),
            header_extension: ".h".to_string(),
            link_name: "taichi_c_api".to_string(),
            output_dir: PathBuf::from("c_api/rust"),
            doc_mode: DocMode::ApiReference,
            emit_crate_root: false,
        }
    }

    /// Sets the module namespace prefix.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the module path extension.
    #[must_use]
    pub fn header_extension(mut self, extension: impl Into<String>) -> Self {
        self.header_extension = extension.into();
        self
    }

    /// Sets the linked library name.
    #[must_use]
    pub fn link_name(mut self, name: impl Into<String>) -> Self {
        self.link_name = name.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the annotation style.
    #[must_use]
    pub fn doc_mode(mut self, mode: DocMode) -> Self {
        self.doc_mode = mode;
        self
    }

    /// Enables or disables writing `lib.rs`.
    #[must_use]
    pub fn emit_crate_root(mut self, enabled: bool) -> Self {
        self.emit_crate_root = enabled;
        self
    }

    /// Returns the module stem of an API module path, or `None` if the path
    /// lies outside the namespace.
    ///
    /// `taichi/taichi_core.h` becomes `taichi_core`.
    #[must_use]
    pub fn module_stem<'p>(&self, path: &'p str) -> Option<&'p str> {
        let rest = path.strip_prefix(self.namespace.as_str())?;
        Some(
            rest.strip_suffix(self.header_extension.as_str())
                .unwrap_or(rest),
        )
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
