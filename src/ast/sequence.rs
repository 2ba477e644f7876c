//! Sequence container
//!
//! The root of every tree and the children container of every [Block].
//! Serializes as a plain list of blocks.

use super::block::Block;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, possibly-empty list of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    blocks: Vec<Block>,
}

impl Sequence {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Pre-order, depth-first traversal yielding `(nesting level, block)`.
    /// Blocks of this sequence are at level 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![self.blocks.iter()],
        }
    }

    /// Number of blocks in the whole tree
    pub fn total_blocks(&self) -> usize {
        self.walk().count()
    }

    /// Number of nesting levels in use (0 for an empty tree)
    pub fn max_nesting(&self) -> usize {
        self.walk().map(|(level, _)| level + 1).max().unwrap_or(0)
    }

    pub(crate) fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Block> {
        self.blocks.last_mut()
    }
}

impl From<Vec<Block>> for Sequence {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl Index<usize> for Sequence {
    type Output = Block;

    fn index(&self, index: usize) -> &Block {
        &self.blocks[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

/// Depth-first iterator returned by [Sequence::walk]
pub struct Walk<'a> {
    stack: Vec<std::slice::Iter<'a, Block>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Block);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(block) => {
                    let level = self.stack.len() - 1;
                    self.stack.push(block.children.iter());
                    return Some((level, block));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sequence {
        Sequence::from(vec![
            Block::with_children(
                0,
                "a",
                vec![Block::with_children(2, "b", vec![Block::leaf(4, "c")])],
            ),
            Block::leaf(0, "d"),
        ])
    }

    #[test]
    fn test_empty_sequence() {
        let seq = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.total_blocks(), 0);
        assert_eq!(seq.max_nesting(), 0);
        assert!(seq.get(0).is_none());
    }

    #[test]
    fn test_walk_is_preorder() {
        let seq = sample();
        let visited: Vec<(usize, &str)> = seq.walk().map(|(l, b)| (l, b.text.as_str())).collect();
        assert_eq!(visited, vec![(0, "a"), (1, "b"), (2, "c"), (0, "d")]);
    }

    #[test]
    fn test_counts() {
        let seq = sample();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.total_blocks(), 4);
        assert_eq!(seq.max_nesting(), 3);
    }

    #[test]
    fn test_serializes_as_list() {
        let seq = Sequence::from(vec![Block::leaf(0, "a")]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"[{"depth":0,"text":"a","children":[]}]"#);
    }
}
