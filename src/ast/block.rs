//! Block element
//!
//! One Block per retained input line.

use super::sequence::Sequence;
use serde::{Deserialize, Serialize};

/// A structural unit corresponding to exactly one retained input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Measured indentation, or the resolved depth for a blank line
    pub depth: usize,
    /// Line content without leading whitespace (and without trailing whitespace when stripping)
    pub text: String,
    /// Blocks nested under this one
    pub children: Sequence,
}

impl Block {
    pub fn new(depth: usize, text: impl Into<String>, children: Sequence) -> Self {
        Self {
            depth,
            text: text.into(),
            children,
        }
    }

    /// A block with no children
    pub fn leaf(depth: usize, text: impl Into<String>) -> Self {
        Self::new(depth, text, Sequence::new())
    }

    pub fn with_children(depth: usize, text: impl Into<String>, children: Vec<Block>) -> Self {
        Self::new(depth, text, Sequence::from(children))
    }

    /// Blank-line blocks always have empty text
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
