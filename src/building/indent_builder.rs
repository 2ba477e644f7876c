//! Indent builder
//!
//!     The stateful core: consumes `(depth, text)` pairs in source order and assembles
//!     the tree purely from relative depth.
//!
//!     The builder keeps a stack of open frames. A frame is a candidate container: it
//!     holds the depth of the block that owns it and the sequence collecting that block's
//!     children. The bottom frame is the root; its owner depth is `None`, which orders
//!     below every real depth.
//!
//! Placement
//!
//!     For every line:
//!         1. While more than one frame is open and the line's depth is <= the top
//!            frame's owner depth, close the top frame.
//!         2. Append a new block to the top frame's sequence.
//!         3. Open a frame for the new block's children.
//!
//!     Nothing else decides placement. Siblings do not need equal depths: once a frame
//!     is open for a block at depth P, any deeper line becomes that block's child. A
//!     line only moves outwards when its depth is <= some open owner depth.
//!
//! Ownership
//!
//!     An open frame owns its sequence. The frame above frame k always belongs to the
//!     last block in frame k's sequence, so closing a frame moves its sequence into that
//!     block. No back-references are ever held.

use crate::ast::{Block, Sequence};
use tracing::trace;

/// One open nesting level
#[derive(Debug)]
struct Frame {
    /// Depth of the block owning `sequence`; `None` for the root
    parent_depth: Option<usize>,
    sequence: Sequence,
}

impl Frame {
    fn accepts(&self, depth: usize) -> bool {
        // None < Some(_), so the root accepts every depth
        Some(depth) > self.parent_depth
    }
}

/// Builds a [Sequence] tree from lines pushed in source order
#[derive(Debug)]
pub struct IndentBuilder {
    stack: Vec<Frame>,
}

impl IndentBuilder {
    pub fn new() -> Self {
        IndentBuilder {
            stack: vec![Frame {
                parent_depth: None,
                sequence: Sequence::new(),
            }],
        }
    }

    /// Place one line. Returns the number of frames that were closed.
    pub fn push_line(&mut self, depth: usize, text: impl Into<String>) -> usize {
        let mut closed = 0;
        while self.stack.len() > 1 && !self.top().accepts(depth) {
            self.close_top();
            closed += 1;
        }

        self.top_mut()
            .sequence
            .push(Block::leaf(depth, text));
        self.stack.push(Frame {
            parent_depth: Some(depth),
            sequence: Sequence::new(),
        });

        trace!(depth, closed, open = self.stack.len(), "placed block");
        closed
    }

    /// Number of currently open frames, root included
    pub fn open_frames(&self) -> usize {
        self.stack.len()
    }

    /// Close every open frame and return the root sequence.
    pub fn finish(mut self) -> Sequence {
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack
            .pop()
            .map(|root| root.sequence)
            .unwrap_or_default()
    }

    fn top(&self) -> &Frame {
        &self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Pop the top frame and hand its sequence to the block that owns it.
    fn close_top(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        if let Some(owner) = self
            .stack
            .last_mut()
            .and_then(|parent| parent.sequence.last_mut())
        {
            owner.children = frame.sequence;
        }
    }
}

impl Default for IndentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
