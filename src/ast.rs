//! Tree data model
//!
//!     A tree is a [Sequence] of [Block]s. Every Block owns a children Sequence, so the
//!     root Sequence owns the whole tree. There are no back-references and no shared
//!     ownership: the shape is a strict tree and is immutable once built.
//!
//!     Insertion order is significant and preserved. Depth values are carried as
//!     measured (or resolved, for blank lines); siblings are not required to agree on
//!     depth.

pub mod block;
pub mod sequence;

pub use block::Block;
pub use sequence::{Sequence, Walk};
