//! Per-module alias re-export registry.

/// Short names collected while emitting one module.
///
/// Keys keep their first registration position. Registering a key again
/// replaces its target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasRegistry {
    entries: Vec<(String, String)>,
}

impl AliasRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `target` under the short name `key`.
    pub fn register(&mut self, key: impl Into<String>, target: impl Into<String>) {
        let key = key.into();
        let target = target.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = target,
            None => self.entries.push((key, target)),
        }
    }

    /// Returns the target registered under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, t)| t.as_str())
    }

    /// Returns true if `key` is registered.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if any key maps to `target`.
    #[must_use]
    pub fn contains_target(&self, target: &str) -> bool {
        self.entries.iter().any(|(_, t)| t == target)
    }

    /// Iterates over `(key, target)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t.as_str()))
    }

    /// Returns the number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no alias was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the `aliases` re-export module.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str("pub mod aliases {\n");
        for (key, target) in self.iter() {
            output.push_str(&format!("pub use super::{target} as {key};\n"));
        }
        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_keeps_order() {
        let mut aliases = AliasRegistry::new();
        aliases.register("Bool", "TiBool");
        aliases.register("FALSE", "TI_FALSE");
        aliases.register("Bool", "TiBool2");
        let pairs: Vec<_> = aliases.iter().collect();
        assert_eq!(pairs, vec![("Bool", "TiBool2"), ("FALSE", "TI_FALSE")]);
        assert_eq!(aliases.len(), 2);
    }

    #[test]
    fn test_render() {
        let mut aliases = AliasRegistry::new();
        aliases.register("Arch", "TiArch");
        aliases.register("create_runtime", "ti_create_runtime");
        assert_eq!(
            aliases.render(),
            "pub mod aliases {\n\
             pub use super::TiArch as Arch;\n\
             pub use super::ti_create_runtime as create_runtime;\n\
             }\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let aliases = AliasRegistry::new();
        assert!(aliases.is_empty());
        assert_eq!(aliases.render(), "pub mod aliases {\n}\n");
    }

    #[test]
    fn test_lookup() {
        let mut aliases = AliasRegistry::new();
        aliases.register("Error", "TiError");
        assert!(aliases.contains_key("Error"));
        assert!(aliases.contains_target("TiError"));
        assert!(!aliases.contains_key("TiError"));
        assert_eq!(aliases.get("Error"), Some("TiError"));
    }
}
