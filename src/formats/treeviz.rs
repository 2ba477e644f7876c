//! Treeviz formatter
//!
//! Treeviz is a visual representation of the block tree with one line per block, which
//! makes it quick to scan whether lines ended up where they were expected.
//!
//! Format:
//!     <prefix><connector> <icon> [<depth>] <label> (label truncated to `label_width` chars)
//!
//! Example:
//!
//! ```text
//! ⧉ 4 blocks
//! ├─ ¶ [0] a
//! │ ├─ ↵ [2]
//! │ └─ ¶ [2] b
//! └─ ¶ [0] c
//! ```
//!
//! Icons
//!     Root: ⧉
//!     Block: ¶
//!     Blank block: ↵

use super::registry::{FormatError, Formatter};
use crate::ast::{Block, Sequence};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn format_block(
    block: &Block,
    prefix: &str,
    is_last: bool,
    label_width: usize,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };

    if block.is_blank() {
        output.push_str(&format!("{}{} ↵ [{}]\n", prefix, connector, block.depth));
    } else {
        output.push_str(&format!(
            "{}{} ¶ [{}] {}\n",
            prefix,
            connector,
            block.depth,
            truncate(&block.text, label_width)
        ));
    }

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = block.children.len();
    for (i, child) in block.children.iter().enumerate() {
        format_block(child, &child_prefix, i == child_count - 1, label_width, output);
    }
}

/// Render a tree with the default label width
pub fn to_treeviz_str(tree: &Sequence) -> String {
    to_treeviz_str_with_width(tree, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with_width(tree: &Sequence, label_width: usize) -> String {
    let total = tree.total_blocks();
    let mut output = format!(
        "⧉ {} {}\n",
        total,
        if total == 1 { "block" } else { "blocks" }
    );

    let count = tree.len();
    for (i, block) in tree.iter().enumerate() {
        format_block(block, "", i == count - 1, label_width, &mut output);
    }
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter {
    label_width: usize,
}

impl TreevizFormatter {
    pub fn new(label_width: usize) -> Self {
        Self { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn serialize(&self, tree: &Sequence) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_width(tree, self.label_width))
    }

    fn description(&self) -> &'static str {
        "Visual tree, one line per block, with depths"
    }
}
