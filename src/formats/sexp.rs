//! Nested-array (s-expression) serialization
//!
//! This is the shape template compilers hand to their per-line grammar: a sequence is
//! `[:multi, ...]` and a block is `[:indent, depth, "text", [:multi, ...]]`.
//!
//! ## Example
//!
//! ```text
//! a
//!   b
//! ```
//!
//! serializes to
//!
//! ```text
//! [:multi, [:indent, 0, "a", [:multi, [:indent, 2, "b", [:multi]]]]]
//! ```
//!
//! ## String literals
//!
//! Text is quoted the way Ruby's `String#inspect` quotes it, so the output reads back
//! as a Ruby literal: `\"`, `\\`, the named escapes (`\n`, `\t`, `\e`, ...), `\#` before
//! `{`, `$` and `@`, `\x7F` for DEL and `\uXXXX` for other control
//! characters. Everything else, non-ASCII included, is written as is.

use super::registry::{FormatError, Formatter};
use crate::ast::{Block, Sequence};
use std::fmt::Write;

/// Serialize a tree to its nested-array form
pub fn to_sexp_str(tree: &Sequence) -> String {
    let mut output = String::new();
    write_sequence(tree, &mut output);
    output
}

fn write_sequence(sequence: &Sequence, output: &mut String) {
    output.push_str("[:multi");
    for block in sequence {
        output.push_str(", ");
        write_block(block, output);
    }
    output.push(']');
}

fn write_block(block: &Block, output: &mut String) {
    // Writing to a String cannot fail
    let _ = write!(output, "[:indent, {}, ", block.depth);
    write_string_literal(&block.text, output);
    output.push_str(", ");
    write_sequence(&block.children, output);
    output.push(']');
}

fn write_string_literal(text: &str, output: &mut String) {
    output.push('"');
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\t' => output.push_str("\\t"),
            '\r' => output.push_str("\\r"),
            '\u{0c}' => output.push_str("\\f"),
            '\u{0b}' => output.push_str("\\v"),
            '\u{08}' => output.push_str("\\b"),
            '\u{07}' => output.push_str("\\a"),
            '\u{1b}' => output.push_str("\\e"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => output.push_str("\\#"),
            '\u{7f}' => output.push_str("\\x7F"),
            c if c.is_control() => {
                let _ = write!(output, "\\u{:04X}", c as u32);
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

/// Formatter implementation for the nested-array format
pub struct SexpFormatter;

impl Formatter for SexpFormatter {
    fn name(&self) -> &'static str {
        "sexp"
    }

    fn serialize(&self, tree: &Sequence) -> Result<String, FormatError> {
        Ok(to_sexp_str(tree))
    }

    fn description(&self) -> &'static str {
        "Nested arrays: [:multi, [:indent, depth, text, [:multi, ...]]]"
    }
}
