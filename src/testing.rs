//! Testing utilities for tree assertions
//!
//!     Checking trees with a handful of `assert_eq!` on counts tells very little when it
//!     fails. The fluent API in [tree_assertions] walks into the tree and reports the
//!     path of the block that did not match, together with a summary of its siblings.
//!
//! Example
//!
//! ```text
//! use indentree::testing::assert_tree;
//!
//! let tree = indentree::compile("a\n  b\n  c", &Default::default());
//! assert_tree(&tree).block_count(1).block(0, |a| {
//!     a.depth(0).text("a").child_count(2).child(1, |c| {
//!         c.depth(2).text("c").is_leaf();
//!     });
//! });
//! ```

pub mod tree_assertions;

pub use tree_assertions::{assert_tree, BlockAssertion, SequenceAssertion};
