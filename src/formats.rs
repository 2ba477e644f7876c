//! Output format implementations for tree serialization
//!
//! This module contains the serializers that turn a built [crate::Sequence] into text:
//! - sexp: the nested-array shape template compilers consume (`[:multi, [:indent, ...]]`)
//! - tag: XML-like tags mirroring the tree structure
//! - treeviz: one line per block, for eyeballing structure
//! - json / yaml: serde serializations of the tree

pub mod registry;
pub mod serialized;
pub mod sexp;
pub mod tag;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use sexp::{to_sexp_str, SexpFormatter};
pub use tag::{serialize_sequence as serialize_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
