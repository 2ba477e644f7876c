//! Public entry points
//!
//!     [compile] and [IndentParser] are the whole contract of the crate: source text and
//!     two switches in, tree out. They are pure and reentrant. Every call keeps its
//!     state on its own stack, so any number of calls may run concurrently.
//!
//!     [Processor] adds the serialization step on top, pairing a parser with a
//!     [FormatRegistry] so callers can go straight from text (or a file) to a rendered
//!     tree in any registered format.
//!
//! Example
//!
//! ```text
//! use indentree::{IndentParser, BuildOptions};
//!
//! let parser = IndentParser::new(BuildOptions::default().with_strip(false));
//! let tree = parser.compile("foo \n");
//! assert_eq!(tree[0].text, "foo ");
//! ```

use crate::ast::Sequence;
use crate::building::build_tree;
use crate::config::IndentreeConfig;
use crate::error::{Error, Result};
use crate::formats::{FormatError, FormatRegistry, TreevizFormatter};
use crate::options::BuildOptions;
use std::path::Path;
use tracing::instrument;

/// Build the tree for `input`.
#[instrument(skip(input), fields(bytes = input.len()))]
pub fn compile(input: &str, options: &BuildOptions) -> Sequence {
    build_tree(input, options)
}

/// A configured tree builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentParser {
    options: BuildOptions,
}

impl IndentParser {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn strip(&self) -> bool {
        self.options.strip
    }

    pub fn track_empty_lines(&self) -> bool {
        self.options.track_empty_lines
    }

    /// Build the tree for `input` with this parser's options.
    pub fn compile(&self, input: &str) -> Sequence {
        compile(input, &self.options)
    }
}

/// Parser plus serializers
pub struct Processor {
    parser: IndentParser,
    formats: FormatRegistry,
    default_format: String,
}

impl Processor {
    /// A processor with the default formats, emitting `sexp` unless told otherwise.
    pub fn new(options: BuildOptions) -> Self {
        Self {
            parser: IndentParser::new(options),
            formats: FormatRegistry::with_defaults(),
            default_format: "sexp".to_string(),
        }
    }

    /// A processor honoring every setting in `config`.
    pub fn from_config(config: &IndentreeConfig) -> Self {
        let mut processor = Self::new(config.build);
        processor
            .formats
            .register(TreevizFormatter::new(config.output.label_width));
        processor.default_format = config.output.format.clone();
        processor
    }

    pub fn parser(&self) -> &IndentParser {
        &self.parser
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Build `source` and serialize the tree as `format`.
    pub fn execute(&self, source: &str, format: &str) -> std::result::Result<String, FormatError> {
        // Fail before building when the format is unknown
        if !self.formats.contains(format) {
            return Err(FormatError::UnknownFormat(format.to_string()));
        }
        let tree = self.parser.compile(source);
        self.formats.render(&tree, format)
    }

    /// Build `source` and serialize it in the default format.
    pub fn execute_default(&self, source: &str) -> std::result::Result<String, FormatError> {
        self.execute(source, &self.default_format)
    }

    /// Read `path`, build it and serialize the tree as `format`.
    pub fn load_and_execute(&self, path: impl AsRef<Path>, format: &str) -> Result<String> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(self.execute(&source, format)?)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}
