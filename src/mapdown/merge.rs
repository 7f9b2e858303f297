//! Layout-preserving merge
//!
//! Reconciles a freshly parsed forest against the forest a UI already
//! holds. Content and structural role always come from the latest parse;
//! identity and cosmetics (id, coordinates, style, note, table payload)
//! survive from the existing node when a match is found. Matching is by
//! exact text first (first unclaimed occurrence, so duplicates pair up in
//! order), then by position, and genuinely new content keeps its fresh id
//! and is placed near its structural parent.
//!
//! Inputs are never mutated; the UI keeps its forest until it swaps in the
//! merged result.

use crate::mapdown::ast::{Forest, Node, Variant};
use std::collections::{HashMap, VecDeque};
use tracing::trace;

/// Horizontal offset of a brand-new node from its parent.
pub const NEW_NODE_OFFSET_X: f64 = 160.0;
/// Vertical step between consecutive brand-new siblings.
pub const NEW_NODE_OFFSET_Y: f64 = 40.0;

/// Depth ceiling; past it parsed subtrees are taken as-is.
const MAX_MERGE_DEPTH: usize = 128;

/// Merge two forests, preserving identity and layout of matching nodes.
pub fn merge_forests(existing: &Forest, parsed: &Forest) -> Forest {
    Forest::new(merge_preserving_layout(&existing.roots, &parsed.roots, None))
}

/// Merge one sibling level. `parent` is only used to place brand-new nodes
/// near their structural parent.
pub fn merge_preserving_layout(
    existing: &[Node],
    parsed: &[Node],
    parent: Option<&Node>,
) -> Vec<Node> {
    merge_level(existing, parsed, parent, 0)
}

fn merge_level(
    existing: &[Node],
    parsed: &[Node],
    parent: Option<&Node>,
    depth: usize,
) -> Vec<Node> {
    if depth > MAX_MERGE_DEPTH {
        return parsed.to_vec();
    }

    // Index existing nodes by exact text, preserving order for duplicates
    let mut by_text: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (index, node) in existing.iter().enumerate() {
        by_text.entry(node.text.as_str()).or_default().push_back(index);
    }
    let mut claimed = vec![false; existing.len()];

    let mut merged = Vec::with_capacity(parsed.len());
    for (index, fresh) in parsed.iter().enumerate() {
        let matched = claim_by_text(&mut by_text, &mut claimed, fresh.text.as_str())
            .or_else(|| claim_by_position(&mut claimed, index));

        match matched {
            Some(found) => {
                trace!(index, found, text = %fresh.text, "merge claimed existing node");
                merged.push(merge_node(&existing[found], fresh, depth));
            }
            None => {
                trace!(index, text = %fresh.text, "merge adopted new node");
                merged.push(adopt_new(fresh, parent, index, depth));
            }
        }
    }

    merged
}

/// Claim the first unclaimed existing node with identical text.
fn claim_by_text(
    by_text: &mut HashMap<&str, VecDeque<usize>>,
    claimed: &mut [bool],
    text: &str,
) -> Option<usize> {
    let queue = by_text.get_mut(text)?;
    while let Some(index) = queue.pop_front() {
        if !claimed[index] {
            claimed[index] = true;
            return Some(index);
        }
    }
    None
}

/// Fall back to the existing node at the same positional index.
fn claim_by_position(claimed: &mut [bool], index: usize) -> Option<usize> {
    if index < claimed.len() && !claimed[index] {
        claimed[index] = true;
        Some(index)
    } else {
        None
    }
}

/// Clone a matched pair: identity and cosmetics from `existing`, content
/// and structural role from `fresh`.
fn merge_node(existing: &Node, fresh: &Node, depth: usize) -> Node {
    let variant = match (&existing.variant, &fresh.variant) {
        // Both tables: the UI's cell-grid payload survives
        (Variant::Table { info }, Variant::Table { .. }) => Variant::Table { info: info.clone() },
        _ => fresh.variant.clone(),
    };

    let mut merged = Node {
        id: existing.id.clone(),
        text: fresh.text.clone(),
        note: existing.note.clone(),
        variant,
        layout: existing.layout.clone(),
        children: Vec::new(),
    };
    merged.children = merge_level(&existing.children, &fresh.children, Some(&merged), depth + 1);
    merged
}

/// Take an unmatched parsed node as-is (its id is already fresh), placing
/// it near the structural parent and recursing so its children are placed
/// too.
fn adopt_new(fresh: &Node, parent: Option<&Node>, index: usize, depth: usize) -> Node {
    let mut node = fresh.clone();
    place_near_parent(&mut node, parent, index);
    node.children = merge_level(&[], &fresh.children, Some(&node), depth + 1);
    node
}

fn place_near_parent(node: &mut Node, parent: Option<&Node>, index: usize) {
    let Some(parent) = parent else { return };
    if node.layout.x.is_none() {
        if let Some(px) = parent.layout.x {
            node.layout.x = Some(px + NEW_NODE_OFFSET_X);
        }
    }
    if node.layout.y.is_none() {
        if let Some(py) = parent.layout.y {
            node.layout.y = Some(py + NEW_NODE_OFFSET_Y * (index as f64 + 1.0));
        }
    }
}
