//! Error types for the converter
//!
//! Structural errors are fatal parse failures. Conversion errors are
//! recoverable guard rejections, raised before any mutation happens so the
//! caller's forest is never left half-converted.

use crate::mapdown::ast::NodeId;
use std::fmt;

/// Errors that can occur while parsing structured text into a forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The document contains no headings and no list items at all.
    NoStructuralElements,
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::NoStructuralElements => {
                write!(f, "document contains no headings or list items")
            }
        }
    }
}

impl std::error::Error for StructureError {}

/// Errors that can occur when changing the structural type of a node.
///
/// Each variant carries the ids involved so a UI can point at the offending
/// relation; the human-readable rendering stays in the `Display` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Converting to a list item while a heading lives somewhere below the node.
    IllegalDescendant { node: NodeId, descendant: NodeId },
    /// Converting to a heading while a later sibling is still a list item.
    IllegalSibling { node: NodeId, sibling: NodeId },
    /// No node with the given id exists in the forest.
    NodeNotFound { node: NodeId },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::IllegalDescendant { node, descendant } => {
                write!(
                    f,
                    "cannot convert node {} to a list item: descendant {} is a heading",
                    node, descendant
                )
            }
            ConversionError::IllegalSibling { node, sibling } => {
                write!(
                    f,
                    "cannot convert node {} to a heading: later sibling {} is a list item",
                    node, sibling
                )
            }
            ConversionError::NodeNotFound { node } => {
                write!(f, "no node with id {} in the forest", node)
            }
        }
    }
}

impl std::error::Error for ConversionError {}
