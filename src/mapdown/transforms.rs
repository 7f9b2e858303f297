//! Structural mutators
//!
//! Tree-rewriting operations the UI invokes on an already-built forest:
//! changing a node's structural type, switching list ordering style,
//! adjusting indentation, and renumbering ordered lists. Type changes are
//! guarded: a conversion that would break ancestor/sibling ordering is
//! rejected before anything is touched, so a failed call leaves the forest
//! exactly as it was. Indent and level adjustments clamp at their bounds
//! instead of erroring.

use crate::mapdown::ast::{ElementKind, Forest, Node, NodeId, StructuralMeta, Variant};
use crate::mapdown::error::ConversionError;

/// Target of a structural type change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    Heading,
    UnorderedItem,
    OrderedItem,
}

/// List ordering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Unordered,
    Ordered,
}

/// Direction of an indent/level adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    Increase,
    Decrease,
}

/// Everything the guards and the mutation need to know about a node's
/// surroundings, collected in one immutable pass.
struct ConversionContext {
    /// Level of the nearest ancestor heading, list ancestors skipped.
    ancestor_heading_level: Option<usize>,
    /// Indentation of the direct parent when it is a list item.
    parent_list_indent: Option<usize>,
    /// First later sibling that is a list item.
    later_list_sibling: Option<NodeId>,
    /// First heading anywhere below the node.
    heading_descendant: Option<NodeId>,
}

/// Change the structural type of a node.
///
/// Converting to a heading is rejected with [`ConversionError::IllegalSibling`]
/// while a later sibling is still a list item; converting to a list item is
/// rejected with [`ConversionError::IllegalDescendant`] while a heading
/// lives below the node. On rejection the forest is untouched.
pub fn change_node_type(
    forest: &mut Forest,
    id: &NodeId,
    new_type: TargetType,
) -> Result<(), ConversionError> {
    let context = find_context(&forest.roots, id)
        .ok_or_else(|| ConversionError::NodeNotFound { node: id.clone() })?;

    match new_type {
        TargetType::Heading => {
            if let Some(sibling) = context.later_list_sibling {
                return Err(ConversionError::IllegalSibling {
                    node: id.clone(),
                    sibling,
                });
            }
        }
        TargetType::UnorderedItem | TargetType::OrderedItem => {
            if let Some(descendant) = context.heading_descendant {
                return Err(ConversionError::IllegalDescendant {
                    node: id.clone(),
                    descendant,
                });
            }
        }
    }

    let node = forest.find_mut(id).expect("node located during validation");
    apply_type_change(node, new_type, &context);
    Ok(())
}

/// Switch a list item between unordered and ordered style. Non-list nodes
/// and unknown ids are left untouched.
pub fn change_list_style(forest: &mut Forest, id: &NodeId, style: ListStyle) {
    let Some(node) = forest.find_mut(id) else { return };
    let Some(meta) = node.meta_mut() else { return };
    if !meta.kind.is_list_item() {
        return;
    }

    match style {
        ListStyle::Unordered => {
            meta.kind = ElementKind::UnorderedItem;
            meta.original_marker = "-".to_string();
        }
        ListStyle::Ordered => {
            meta.kind = ElementKind::OrderedItem;
            meta.original_marker = "1.".to_string();
            // checkboxes exist only on unordered items
            meta.checkbox = None;
        }
    }
}

/// Adjust a node's indentation (list items) or level (headings), clamped
/// to valid bounds: level stays within 1-6, indent never goes below 0.
pub fn change_indent(forest: &mut Forest, id: &NodeId, direction: IndentDirection) {
    let Some(node) = forest.find_mut(id) else { return };
    let Some(meta) = node.meta_mut() else { return };

    match meta.kind {
        ElementKind::Heading => {
            let level = match direction {
                IndentDirection::Increase => (meta.level + 1).min(6),
                IndentDirection::Decrease => meta.level.saturating_sub(1).max(1),
            };
            meta.level = level;
            meta.original_marker = "#".repeat(level);
        }
        ElementKind::UnorderedItem | ElementKind::OrderedItem => {
            let indent = meta.indent_spaces.unwrap_or(0);
            let indent = match direction {
                IndentDirection::Increase => indent + 2,
                IndentDirection::Decrease => indent.saturating_sub(2),
            };
            meta.indent_spaces = Some(indent);
            meta.level = indent / 2 + 1;
        }
        ElementKind::Preface => {}
    }
}

/// Renumber every run of consecutive ordered siblings from 1. Any other
/// node kind breaks a run.
pub fn renumber_ordered_lists(forest: &mut Forest) {
    renumber_level(&mut forest.roots);
}

fn renumber_level(nodes: &mut [Node]) {
    let mut counter = 0usize;
    for node in nodes.iter_mut() {
        let is_ordered = node
            .meta()
            .is_some_and(|meta| meta.kind == ElementKind::OrderedItem);
        if is_ordered {
            counter += 1;
            node.meta_mut()
                .expect("ordered item has metadata")
                .original_marker = format!("{counter}.");
        } else {
            counter = 0;
        }
        renumber_level(&mut node.children);
    }
}

fn find_context(roots: &[Node], id: &NodeId) -> Option<ConversionContext> {
    search_context(roots, id, None, None)
}

fn search_context(
    siblings: &[Node],
    id: &NodeId,
    ancestor_heading_level: Option<usize>,
    parent_list_indent: Option<usize>,
) -> Option<ConversionContext> {
    for (index, node) in siblings.iter().enumerate() {
        if &node.id == id {
            let later_list_sibling = siblings[index + 1..]
                .iter()
                .find(|s| s.meta().is_some_and(|m| m.kind.is_list_item()))
                .map(|s| s.id.clone());
            return Some(ConversionContext {
                ancestor_heading_level,
                parent_list_indent,
                later_list_sibling,
                heading_descendant: find_heading(&node.children),
            });
        }

        let (child_heading, child_list_indent) = match node.meta() {
            Some(meta) if meta.kind == ElementKind::Heading => (Some(meta.level), None),
            Some(meta) if meta.kind.is_list_item() => (
                ancestor_heading_level,
                Some(meta.indent_spaces.unwrap_or(0)),
            ),
            _ => (ancestor_heading_level, None),
        };
        if let Some(found) = search_context(&node.children, id, child_heading, child_list_indent) {
            return Some(found);
        }
    }
    None
}

fn find_heading(nodes: &[Node]) -> Option<NodeId> {
    for node in nodes {
        if node
            .meta()
            .is_some_and(|meta| meta.kind == ElementKind::Heading)
        {
            return Some(node.id.clone());
        }
        if let Some(found) = find_heading(&node.children) {
            return Some(found);
        }
    }
    None
}

fn apply_type_change(node: &mut Node, new_type: TargetType, context: &ConversionContext) {
    // Only plain, non-preface nodes carry a convertible structural role
    let Variant::Plain { meta } = &mut node.variant else {
        return;
    };
    if meta
        .as_ref()
        .is_some_and(|m| m.kind == ElementKind::Preface)
    {
        return;
    }
    let source_line = meta.as_ref().and_then(|m| m.source_line);
    let was_unordered = meta
        .as_ref()
        .is_some_and(|m| m.kind == ElementKind::UnorderedItem);

    let mut new_meta = match new_type {
        TargetType::Heading => {
            let level = context.ancestor_heading_level.map_or(1, |l| l + 1).min(6);
            StructuralMeta::heading(level)
        }
        TargetType::UnorderedItem => {
            let indent = context.parent_list_indent.map_or(0, |i| i + 2);
            let mut unordered = StructuralMeta::unordered(indent);
            if was_unordered {
                unordered.checkbox = meta.as_ref().and_then(|m| m.checkbox);
            }
            unordered
        }
        TargetType::OrderedItem => {
            let indent = context.parent_list_indent.map_or(0, |i| i + 2);
            StructuralMeta::ordered(indent)
        }
    };
    new_meta.source_line = source_line;
    *meta = Some(new_meta);
}
