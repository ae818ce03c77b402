use std::collections::VecDeque;

use serde::Serialize;

use crate::graph::Node;

/// A node and its subtrees, used only for hierarchical layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootedTree {
    /// The node at this position
    pub data: Node,
    /// Subtrees in ascending id order
    pub children: Vec<RootedTree>,
}

impl RootedTree {
    /// Create a tree from a root node and its subtrees
    pub fn new(data: Node, children: Vec<RootedTree>) -> Self {
        Self { data, children }
    }

    /// Create a tree with no children
    pub fn leaf(data: Node) -> Self {
        Self::new(data, Vec::new())
    }

    /// Returns `(depth, max_width)` for sizing a layout viewport.
    ///
    /// `depth` is the number of levels, the root being level 0, so a single
    /// node has depth 1. `max_width` is the largest number of nodes found on
    /// any one level.
    pub fn layout_size(&self) -> (usize, usize) {
        let mut widths: Vec<usize> = Vec::new();
        let mut queue = VecDeque::from([(0usize, self)]);

        while let Some((level, tree)) = queue.pop_front() {
            if widths.len() == level {
                widths.push(0);
            }
            widths[level] += 1;
            queue.extend(tree.children.iter().map(|child| (level + 1, child)));
        }

        let max_width = widths.iter().copied().max().unwrap_or(0);
        (widths.len(), max_width)
    }

    /// Total number of nodes in the tree
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            count += 1;
            stack.extend(tree.children.iter());
        }
        count
    }

    /// Node ids in depth-first pre-order, children left to right
    pub fn node_ids_preorder(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            ids.push(tree.data.id.as_str());
            stack.extend(tree.children.iter().rev());
        }
        ids
    }
}
