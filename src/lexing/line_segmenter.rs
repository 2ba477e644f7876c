//! Line segmentation
//!
//! Groups the logos token stream into physical lines. Each [Line] holds its raw content
//! (terminator excluded) and knows whether it is blank.
//!
//! Segmentation is lazy: [Lines] pulls tokens on demand and never buffers more than the
//! current line. It is also restartable, since cloning a [Lines] (or calling
//! [segment_lines] again) replays the same sequence from the same point.
//!
//! Terminators
//!
//!     `\n` ends a line. A terminator at the very end of the source does not open another
//!     (empty) line, so `"foo\n"` and `"foo"` segment identically. An empty source
//!     produces no lines at all.
//!
//! Carriage Returns
//!
//!     Every `\r` is dropped, wherever it appears, so `\r\n` sources segment like `\n`
//!     ones and a stray `\r` neither counts as content nor splits indentation. Raw content
//!     is borrowed from the source unless a `\r` has to be cut out of the middle of it.

use super::tokens::Token;
use logos::Logos;
use std::borrow::Cow;

/// One physical line of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based physical line number
    pub number: usize,
    /// Line content with the terminator and every carriage return removed
    pub raw: Cow<'a, str>,
    /// True iff the line is empty or only holds spaces and tabs
    pub is_blank: bool,
}

/// Lazy iterator over the physical lines of a source string
#[derive(Clone)]
pub struct Lines<'a> {
    source: &'a str,
    lexer: logos::Lexer<'a, Token>,
    line_start: usize,
    number: usize,
    has_content: bool,
    has_return: bool,
    done: bool,
}

/// Segment `source` into lines.
pub fn segment_lines(source: &str) -> Lines<'_> {
    Lines {
        source,
        lexer: Token::lexer(source),
        line_start: 0,
        number: 0,
        has_content: false,
        has_return: false,
        done: false,
    }
}

impl<'a> Lines<'a> {
    fn emit(&mut self, end: usize) -> Line<'a> {
        self.number += 1;
        let slice = &self.source[self.line_start..end];
        let line = Line {
            number: self.number,
            raw: if self.has_return {
                without_returns(slice)
            } else {
                Cow::Borrowed(slice)
            },
            is_blank: !self.has_content,
        };
        self.has_content = false;
        self.has_return = false;
        line
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(result) = self.lexer.next() {
            let span = self.lexer.span();
            match result {
                Ok(Token::Newline) => {
                    let line = self.emit(span.start);
                    self.line_start = span.end;
                    return Some(line);
                }
                Ok(Token::CarriageReturn) => self.has_return = true,
                Ok(Token::Whitespace) => {}
                Ok(Token::Text) | Err(_) => self.has_content = true,
            }
        }

        // Source exhausted: flush an unterminated final line unless only returns are left
        self.done = true;
        let rest = &self.source[self.line_start..];
        if rest.bytes().any(|b| b != b'\r') {
            Some(self.emit(self.source.len()))
        } else {
            None
        }
    }
}

impl std::iter::FusedIterator for Lines<'_> {}

fn without_returns(slice: &str) -> Cow<'_, str> {
    let trimmed = slice.trim_end_matches('\r');
    if trimmed.contains('\r') {
        Cow::Owned(trimmed.replace('\r', ""))
    } else {
        Cow::Borrowed(trimmed)
    }
}
