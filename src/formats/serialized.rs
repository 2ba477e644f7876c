//! Serde-backed formats
//!
//! JSON and YAML serializations of the tree. Both render a sequence as a list and a
//! block as a `{depth, text, children}` map.

use super::registry::{FormatError, Formatter};
use crate::ast::Sequence;

/// Pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, tree: &Sequence) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree)
            .map_err(|e| FormatError::Serialization {
                format: self.name(),
                message: e.to_string(),
            })
    }

    fn description(&self) -> &'static str {
        "JSON list of {depth, text, children} objects"
    }
}

/// YAML document
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, tree: &Sequence) -> Result<String, FormatError> {
        serde_yaml::to_string(tree).map_err(|e| FormatError::Serialization {
            format: self.name(),
            message: e.to_string(),
        })
    }

    fn description(&self) -> &'static str {
        "YAML list of {depth, text, children} mappings"
    }
}
