//! XML-like tag serialization
//!
//! Serializes the tree to an XML-like format that directly reflects its structure.
//!
//! ## Format
//!
//! - The root sequence → `<sequence>`
//! - Each block → `<block depth="N">text</block>`
//! - Children → nested in a `<children>` tag inside the block
//!
//! ## Example
//!
//! ```text
//! <sequence>
//!   <block depth="0">a<children>
//!     <block depth="2">b</block>
//!   </children></block>
//! </sequence>
//! ```

use super::registry::{FormatError, Formatter};
use crate::ast::{Block, Sequence};

/// Serialize a tree to tag format
pub fn serialize_sequence(tree: &Sequence) -> String {
    let mut result = String::new();
    result.push_str("<sequence>\n");
    for block in tree {
        serialize_block(block, 1, &mut result);
    }
    result.push_str("</sequence>");
    result
}

/// Serialize a block (recursive)
fn serialize_block(block: &Block, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    output.push_str(&format!("{}<block depth=\"{}\">", indent, block.depth));
    output.push_str(&escape_xml(&block.text));

    if block.children.is_empty() {
        output.push_str("</block>\n");
    } else {
        output.push_str("<children>\n");
        for child in &block.children {
            serialize_block(child, indent_level + 1, output);
        }
        output.push_str(&format!("{}</children></block>\n", indent));
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formatter implementation for tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn serialize(&self, tree: &Sequence) -> Result<String, FormatError> {
        Ok(serialize_sequence(tree))
    }

    fn description(&self) -> &'static str {
        "XML-like tags mirroring the block tree"
    }
}
