//! Output format registry
//!
//! Formats are looked up by name at run time (the CLI's `--format`, the config file's
//! `output.format`), so every serializer sits behind the [Formatter] trait and lives in
//! a [FormatRegistry]. Names are kept in sorted order, which is also the order
//! `--list-formats` prints them in.

use super::{JsonFormatter, SexpFormatter, TagFormatter, TreevizFormatter, YamlFormatter};
use crate::ast::Sequence;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    #[error("{format} serialization failed: {message}")]
    Serialization {
        format: &'static str,
        message: String,
    },
}

/// A named tree serializer
pub trait Formatter: Send + Sync {
    /// Name used to select the format
    fn name(&self) -> &'static str;

    /// One-line summary for format listings
    fn description(&self) -> &'static str;

    fn serialize(&self, tree: &Sequence) -> Result<String, FormatError>;
}

/// Formatters by name
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in format, with treeviz at its default label width.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SexpFormatter);
        registry.register(TagFormatter);
        registry.register(TreevizFormatter::default());
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }

    /// Add `formatter` under its name, returning the one it displaced.
    pub fn register<F>(&mut self, formatter: F) -> Option<Box<dyn Formatter>>
    where
        F: Formatter + 'static,
    {
        self.formatters.insert(formatter.name(), Box::new(formatter))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `tree` with the format called `name`.
    pub fn render(&self, tree: &Sequence, name: &str) -> Result<String, FormatError> {
        self.get(name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))?
            .serialize(tree)
    }

    /// Format names, sorted
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formatters.keys().copied()
    }

    /// `(name, description)` pairs, sorted by name
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.formatters
            .values()
            .map(|formatter| (formatter.name(), formatter.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Block;

    struct TextCount;

    impl Formatter for TextCount {
        fn name(&self) -> &'static str {
            "count"
        }

        fn description(&self) -> &'static str {
            "Number of non-blank blocks"
        }

        fn serialize(&self, tree: &Sequence) -> Result<String, FormatError> {
            let count = tree.walk().filter(|(_, block)| !block.is_blank()).count();
            Ok(count.to_string())
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.names().count(), 0);
        assert!(!registry.contains("sexp"));
    }

    #[test]
    fn test_render_with_registered_format() {
        let mut registry = FormatRegistry::new();
        assert!(registry.register(TextCount).is_none());

        let tree = Sequence::from(vec![
            Block::with_children(0, "a", vec![Block::leaf(2, "")]),
            Block::leaf(0, "b"),
        ]);
        assert_eq!(registry.render(&tree, "count").unwrap(), "2");
        assert_eq!(registry.get("count").map(|f| f.name()), Some("count"));
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.render(&Sequence::new(), "xml"),
            Err(FormatError::UnknownFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_defaults_are_listed_in_name_order() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["json", "sexp", "tag", "treeviz", "yaml"]
        );
        assert!(registry
            .entries()
            .all(|(_, description)| !description.is_empty()));
    }

    #[test]
    fn test_register_returns_displaced_formatter() {
        let mut registry = FormatRegistry::with_defaults();
        let displaced = registry.register(TreevizFormatter::new(5));
        assert_eq!(displaced.map(|f| f.name()), Some("treeviz"));
        assert_eq!(registry.names().count(), 5);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormatError::UnknownFormat("xml".into()).to_string(),
            "unknown output format 'xml'"
        );
        let err = FormatError::Serialization {
            format: "yaml",
            message: "bad".into(),
        };
        assert_eq!(err.to_string(), "yaml serialization failed: bad");
    }
}
