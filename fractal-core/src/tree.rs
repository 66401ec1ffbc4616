use crate::geometry::{FractalParameters, Line, create_branches};

/// A binary tree where every node, leaf or internal, carries a value.
///
/// Each subtree is owned by its parent, so the structure is acyclic and
/// cannot be mutated once built.
#[derive(Clone, Debug, PartialEq)]
pub enum Tree<T> {
    Leaf(T),
    Node {
        value: T,
        left: Box<Tree<T>>,
        right: Box<Tree<T>>,
    },
}

impl<T> Tree<T> {
    pub fn value(&self) -> &T {
        match self {
            Tree::Leaf(value) | Tree::Node { value, .. } => value,
        }
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Node { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Node { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Iterates over the values in pre-order: self, left subtree, right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`Tree::pre_order`].
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        match tree {
            Tree::Leaf(value) => Some(value),
            Tree::Node { value, left, right } => {
                // Right goes first so that left is popped first.
                self.stack.push(right);
                self.stack.push(left);
                Some(value)
            }
        }
    }
}

/// Recursively builds a complete binary tree of segments rooted at `line`.
///
/// At `depth == 0` the result is a single leaf. Otherwise the two branches
/// of `line` are grown into subtrees of `depth - 1`, left before right.
/// The result always holds `2^(depth + 1) - 1` nodes.
///
/// There is no guard against huge depths; memory and stack use grow
/// exponentially and linearly with `depth` respectively.
pub fn create_tree(depth: u32, params: &FractalParameters, line: Line) -> Tree<Line> {
    if depth == 0 {
        return Tree::Leaf(line);
    }

    let (left_line, right_line) = create_branches(params, &line);
    let left = create_tree(depth - 1, params, left_line);
    let right = create_tree(depth - 1, params, right_line);

    Tree::Node {
        value: line,
        left: Box::new(left),
        right: Box::new(right),
    }
}
