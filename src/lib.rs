//! # indentree
//!
//! Builds an ordered block tree out of plain text, using nothing but each line's
//! leading-whitespace depth as the structural signal. This is the front end of
//! indentation-sensitive template languages: the tree produced here is handed to a
//! per-line grammar that decides what each line's text means.
//!
//! File Layout
//!
//!     src/
//!       ├── lexing      Line segmentation and depth measurement
//!       ├── building    Blank-line depth resolution and the indent builder
//!       ├── ast         Sequence / Block data model
//!       ├── pipeline    Public entry points (IndentParser, Processor)
//!       ├── formats     Tree serializers (sexp, tag, treeviz, json, yaml)
//!       ├── config      Layered configuration loading
//!       └── testing     Fluent tree assertions for tests
//!
//! The flow is always: source text → [lexing] → [building] → [ast::Sequence].
//!
//! ```text
//! use indentree::{compile, BuildOptions};
//!
//! let tree = compile("a\n  b", &BuildOptions::default());
//! assert_eq!(tree[0].children[0].text, "b");
//! ```

pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod options;
pub mod pipeline;
pub mod testing;

pub use ast::{Block, Sequence};
pub use error::{Error, Result};
pub use options::BuildOptions;
pub use pipeline::{compile, IndentParser, Processor};
