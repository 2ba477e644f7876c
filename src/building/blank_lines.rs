//! Blank line depth resolution
//!
//!     A blank line has no measurable depth: all of it is whitespace. Its depth is taken
//!     from the next non-blank line instead, so that the blank line lands in the same
//!     container as the content it precedes. Blank lines at the end of the source, with
//!     no non-blank line after them, resolve to depth 0.
//!
//!     This needs one line of lookahead, which is handled by buffering the current run of
//!     consecutive blank lines until the line that ends the run is seen. Every blank line
//!     in a run gets the same depth, and the run is released in source order, before the
//!     non-blank line that closed it.
//!
//! Example
//!
//!     Input lines (· marks a space):
//!         a
//!         ··
//!         <empty>
//!         ····b
//!
//!     Resolved depths: a=0, blank=4, blank=4, b=4

use crate::lexing::{measure_depth, Line};
use std::collections::VecDeque;
use std::iter::Fuse;

/// A line with its final depth decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLine<'a> {
    pub line: Line<'a>,
    pub depth: usize,
}

/// Iterator adapter assigning a depth to every line, blank or not
pub struct BlankLineResolver<'a, I>
where
    I: Iterator<Item = Line<'a>>,
{
    lines: Fuse<I>,
    pending_blanks: Vec<Line<'a>>,
    ready: VecDeque<ResolvedLine<'a>>,
}

/// Resolve the depth of every line in `lines`.
pub fn resolve_blank_depths<'a, I>(lines: I) -> BlankLineResolver<'a, I>
where
    I: Iterator<Item = Line<'a>>,
{
    BlankLineResolver {
        lines: lines.fuse(),
        pending_blanks: Vec::new(),
        ready: VecDeque::new(),
    }
}

impl<'a, I> BlankLineResolver<'a, I>
where
    I: Iterator<Item = Line<'a>>,
{
    fn release_blanks(&mut self, depth: usize) {
        for line in self.pending_blanks.drain(..) {
            self.ready.push_back(ResolvedLine { line, depth });
        }
    }
}

impl<'a, I> Iterator for BlankLineResolver<'a, I>
where
    I: Iterator<Item = Line<'a>>,
{
    type Item = ResolvedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(resolved) = self.ready.pop_front() {
            return Some(resolved);
        }

        loop {
            match self.lines.next() {
                Some(line) if line.is_blank => self.pending_blanks.push(line),
                Some(line) => {
                    let depth = measure_depth(&line.raw);
                    self.release_blanks(depth);
                    self.ready.push_back(ResolvedLine { line, depth });
                    return self.ready.pop_front();
                }
                None => {
                    // Trailing blank run: nothing follows, so it resolves to depth 0
                    self.release_blanks(0);
                    return self.ready.pop_front();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::segment_lines;

    fn depths(source: &str) -> Vec<(String, usize)> {
        resolve_blank_depths(segment_lines(source))
            .map(|r| (r.line.raw.into_owned(), r.depth))
            .collect()
    }

    fn expected(lines: &[(&str, usize)]) -> Vec<(String, usize)> {
        lines.iter().map(|(raw, depth)| (raw.to_string(), *depth)).collect()
    }

    #[test]
    fn test_non_blank_lines_use_measured_depth() {
        assert_eq!(depths("a\n  b\n c"), expected(&[("a", 0), ("  b", 2), (" c", 1)]));
    }

    #[test]
    fn test_blank_takes_next_depth() {
        assert_eq!(depths("a\n\n  b"), expected(&[("a", 0), ("", 2), ("  b", 2)]));
    }

    #[test]
    fn test_whitespace_of_blank_line_is_ignored() {
        assert_eq!(depths("a\n        \n  b"), expected(&[("a", 0), ("        ", 2), ("  b", 2)]));
    }

    #[test]
    fn test_blank_run_shares_depth() {
        assert_eq!(
            depths("a\n\n \n\n   b"),
            expected(&[("a", 0), ("", 3), (" ", 3), ("", 3), ("   b", 3)])
        );
    }

    #[test]
    fn test_trailing_blanks_resolve_to_zero() {
        assert_eq!(depths("  a\n\n  \n"), expected(&[("  a", 2), ("", 0), ("  ", 0)]));
    }

    #[test]
    fn test_leading_blanks() {
        assert_eq!(depths("\n  a"), expected(&[("", 2), ("  a", 2)]));
    }

    #[test]
    fn test_only_blank_lines() {
        assert_eq!(depths("\n\n  "), expected(&[("", 0), ("", 0), ("  ", 0)]));
    }

    #[test]
    fn test_carriage_return_inside_indentation_counts_nothing() {
        assert_eq!(depths("a\r\n \r b"), expected(&[("a", 0), ("  b", 2)]));
    }
}
