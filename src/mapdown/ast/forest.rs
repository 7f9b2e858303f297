//! Forest element
//!
//! A document is an ordered sequence of root nodes, not a single root: a
//! text may legally contain several top-level headings, plus at most one
//! synthetic preface node which always comes first.

use crate::mapdown::ast::node::{Node, NodeId};
use serde::{Deserialize, Serialize};

/// An ordered forest of root nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Forest {
    pub roots: Vec<Node>,
}

impl Forest {
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    /// Depth-first lookup of a node by id.
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        fn search<'a>(nodes: &'a [Node], id: &NodeId) -> Option<&'a Node> {
            for node in nodes {
                if &node.id == id {
                    return Some(node);
                }
                if let Some(found) = search(&node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        search(&self.roots, id)
    }

    /// Depth-first mutable lookup of a node by id.
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        fn search<'a>(nodes: &'a mut [Node], id: &NodeId) -> Option<&'a mut Node> {
            for node in nodes {
                if &node.id == id {
                    return Some(node);
                }
                if let Some(found) = search(&mut node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        search(&mut self.roots, id)
    }

    /// Total number of nodes in the forest.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes.len() + nodes.iter().map(|n| count(&n.children)).sum::<usize>()
        }
        count(&self.roots)
    }

    /// Visit every node in document order.
    pub fn walk(&self, mut visit: impl FnMut(&Node)) {
        // Explicit stack; caller-built forests may nest arbitrarily deep
        let mut stack: Vec<&Node> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            visit(node);
            for child in node.children.iter().rev() {
                stack.push(child);
            }
        }
    }
}
