//! Lexing
//!
//!     Splits raw source text into physical lines. This is the only place that looks at
//!     raw characters; everything downstream works on [Line] values.
//!
//! The Lexing Steps
//!
//!     1. Core tokenization using a logos lexer. See [tokens](tokens).
//!        The lexer only distinguishes line terminators, carriage returns, runs of
//!        indentation characters (space and tab) and everything else.
//!
//!     2. Line segmentation. See [line_segmenter](line_segmenter).
//!        Tokens are grouped into lines by their terminators and carriage returns are
//!        dropped. A line records whether it had any content token, which is all that is
//!        needed to call it blank.
//!
//! Indentation Measurement
//!
//!     Segmentation deliberately does not measure depth. A blank line has no meaningful
//!     depth of its own; its depth comes from the next non-blank line, and that is a
//!     building concern (see [crate::building::blank_lines]). Measuring helpers live in
//!     [indentation](indentation) so both stages agree on what counts as indentation.

pub mod indentation;
pub mod line_segmenter;
pub mod tokens;

pub use indentation::{is_indent_char, measure_depth, normalize_text};
pub use line_segmenter::{segment_lines, Line, Lines};
pub use tokens::Token;
