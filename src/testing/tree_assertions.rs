//! Fluent assertion API for trees

use crate::ast::{Block, Sequence};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a root sequence
pub fn assert_tree(tree: &Sequence) -> SequenceAssertion<'_> {
    SequenceAssertion {
        sequence: tree,
        context: "root".to_string(),
    }
}

/// One-line summary of a sequence, used in failure messages
fn summarize(sequence: &Sequence) -> String {
    sequence
        .iter()
        .map(|b| format!("{}:{:?}", b.depth, b.text))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Sequence Assertions
// ============================================================================

pub struct SequenceAssertion<'a> {
    sequence: &'a Sequence,
    context: String,
}

impl<'a> SequenceAssertion<'a> {
    /// Assert the number of blocks in this sequence
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.sequence.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} blocks, found {} blocks: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.sequence)
        );
        self
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = self.sequence.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Block index {} out of bounds ({} blocks)",
                self.context,
                index,
                self.sequence.len()
            )
        });
        assertion(BlockAssertion {
            block,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the block texts of this sequence, in order
    pub fn texts(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.sequence.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(actual, expected, "{}: block texts differ", self.context);
        self
    }

    /// Assert the block depths of this sequence, in order
    pub fn depths(self, expected: &[usize]) -> Self {
        let actual: Vec<usize> = self.sequence.iter().map(|b| b.depth).collect();
        assert_eq!(actual, expected, "{}: block depths differ", self.context);
        self
    }

    /// Assert that no block in this sequence has children
    pub fn all_leaves(self) -> Self {
        for (i, block) in self.sequence.iter().enumerate() {
            assert!(
                block.is_leaf(),
                "{}[{}]: Expected a leaf, found {} children: [{}]",
                self.context,
                i,
                block.children.len(),
                summarize(&block.children)
            );
        }
        self
    }

    /// Assert that no blank block appears anywhere below this sequence
    pub fn no_blank_blocks(self) -> Self {
        if let Some((level, block)) = self.sequence.walk().find(|(_, b)| b.is_blank()) {
            panic!(
                "{}: Expected no blank blocks, found one at depth {} (nesting level {})",
                self.context, block.depth, level
            );
        }
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn depth(self, expected: usize) -> Self {
        assert_eq!(
            self.block.depth, expected,
            "{}: Expected depth {}, found {} (text {:?})",
            self.context, expected, self.block.depth, self.block.text
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.block.text, expected,
            "{}: Expected text {:?}, found {:?}",
            self.context, expected, self.block.text
        );
        self
    }

    pub fn is_blank(self) -> Self {
        assert!(
            self.block.is_blank(),
            "{}: Expected a blank block, found text {:?}",
            self.context,
            self.block.text
        );
        self
    }

    pub fn is_leaf(self) -> Self {
        assert!(
            self.block.is_leaf(),
            "{}: Expected no children, found [{}]",
            self.context,
            summarize(&self.block.children)
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.block.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.block.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let child = self.block.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                self.context,
                index,
                self.block.children.len()
            )
        });
        assertion(BlockAssertion {
            block: child,
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Continue with sequence-level assertions on the children
    pub fn children<F>(self, assertion: F) -> Self
    where
        F: FnOnce(SequenceAssertion<'a>),
    {
        assertion(SequenceAssertion {
            sequence: &self.block.children,
            context: format!("{}.children", self.context),
        });
        self
    }
}
