//! Building
//!
//!     Turns segmented lines into the final tree. Building is a single forward pass with
//!     one run of blank lines of lookahead, and it cannot fail: there is no such thing as
//!     invalid indentation.
//!
//! The Building Steps
//!
//!     1. Blank line filtering. When empty-line tracking is off, blank lines are dropped
//!        before anything else sees them, so they can never shift the depth or nesting
//!        of surrounding lines.
//!
//!     2. Blank line depth resolution. See [blank_lines](blank_lines).
//!
//!     3. Content normalization. Leading indentation is removed; trailing spaces and
//!        tabs are removed too when stripping is on. Blank lines always get empty text.
//!
//!     4. Placement. See [indent_builder](indent_builder).

pub mod blank_lines;
pub mod indent_builder;

pub use blank_lines::{resolve_blank_depths, BlankLineResolver, ResolvedLine};
pub use indent_builder::IndentBuilder;

use crate::ast::Sequence;
use crate::lexing::{normalize_text, segment_lines, Line};
use crate::options::BuildOptions;
use tracing::debug;

/// Counters collected during one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Physical lines read from the source
    pub lines: usize,
    /// Blocks placed in the tree
    pub blocks: usize,
    /// Blank lines that became blocks
    pub blank_blocks: usize,
    /// Blank lines dropped because tracking was off
    pub dropped_blanks: usize,
}

/// Build the tree for `source`.
pub fn build_tree(source: &str, options: &BuildOptions) -> Sequence {
    build_tree_with_stats(source, options).0
}

/// Build the tree for `source`, also reporting what happened to its lines.
pub fn build_tree_with_stats(source: &str, options: &BuildOptions) -> (Sequence, BuildStats) {
    let mut stats = BuildStats::default();
    let mut builder = IndentBuilder::new();

    let mut lines_read = 0;
    let mut dropped_blanks = 0;
    let retained = segment_lines(source)
        .inspect(|_| lines_read += 1)
        .filter(|line: &Line<'_>| {
            let keep = options.track_empty_lines || !line.is_blank;
            if !keep {
                dropped_blanks += 1;
            }
            keep
        });

    for resolved in resolve_blank_depths(retained) {
        let text = if resolved.line.is_blank {
            stats.blank_blocks += 1;
            ""
        } else {
            normalize_text(&resolved.line.raw, options.strip)
        };
        builder.push_line(resolved.depth, text);
        stats.blocks += 1;
    }
    stats.lines = lines_read;
    stats.dropped_blanks = dropped_blanks;

    let tree = builder.finish();
    debug!(
        lines = stats.lines,
        blocks = stats.blocks,
        blank_blocks = stats.blank_blocks,
        dropped_blanks = stats.dropped_blanks,
        nesting = tree.max_nesting(),
        "built tree"
    );
    (tree, stats)
}
