//! Structured-text serializer
//!
//! Walks the forest depth-first and reconstructs the document: marker
//! prefixes, indentation, checkbox notation, verbatim notes and table
//! blocks. Lines are joined with the line ending recorded on the first
//! root. This is a total function: any well-formed forest serializes.
//!
//! Indentation rules: a list item directly under a heading (or preface, or
//! at the root) is emitted at column zero; nested items reuse their stored
//! indentation, falling back to two spaces per nesting level when a node
//! was created on the canvas and has none.

use crate::mapdown::ast::{
    is_numeric_marker, Checkbox, ElementKind, Forest, Node, StructuralMeta, Variant,
};
use crate::mapdown::lexing::split_lines;

/// Serialize a forest back into structured text.
pub fn serialize(forest: &Forest) -> String {
    let line_ending = forest
        .roots
        .first()
        .and_then(|root| root.layout.line_ending)
        .unwrap_or_default();

    let mut lines: Vec<String> = Vec::new();
    let mut stack: Vec<(&Node, usize)> = forest.roots.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, parent_level)) = stack.pop() {
        let child_level = emit_node(node, parent_level, &mut lines);
        for child in node.children.iter().rev() {
            stack.push((child, child_level));
        }
    }

    lines.join(line_ending.as_str())
}

/// Emit one node's lines; returns the nesting level its children inherit.
fn emit_node(node: &Node, parent_level: usize, lines: &mut Vec<String>) -> usize {
    match &node.variant {
        Variant::Table { .. } => {
            push_lines(lines, &node.text);
            push_note(lines, node);
            0
        }
        Variant::Plain { meta: None } => {
            // Canvas-created node without a structural role: plain passthrough
            push_lines(lines, &node.text);
            push_note(lines, node);
            0
        }
        Variant::Plain { meta: Some(meta) } => match meta.kind {
            ElementKind::Preface => {
                // The preface's own text is always empty and never emitted
                push_note(lines, node);
                0
            }
            ElementKind::Heading => {
                let level = meta.level.clamp(1, 6);
                lines.push(format!("{} {}", "#".repeat(level), node.text));
                push_note(lines, node);
                0
            }
            ElementKind::UnorderedItem | ElementKind::OrderedItem => {
                let indent = effective_indent(meta, parent_level);
                lines.push(format!(
                    "{}{}{}{}",
                    " ".repeat(indent),
                    marker_prefix(meta),
                    checkbox_prefix(meta),
                    node.text
                ));
                push_note(lines, node);
                indent / 2 + 1
            }
        },
    }
}

fn effective_indent(meta: &StructuralMeta, parent_level: usize) -> usize {
    if parent_level == 0 {
        0
    } else {
        meta.indent_spaces.unwrap_or(parent_level * 2)
    }
}

fn marker_prefix(meta: &StructuralMeta) -> String {
    match meta.kind {
        ElementKind::OrderedItem => {
            if is_numeric_marker(&meta.original_marker) {
                format!("{} ", meta.original_marker)
            } else {
                "1. ".to_string()
            }
        }
        _ => "- ".to_string(),
    }
}

fn checkbox_prefix(meta: &StructuralMeta) -> &'static str {
    if meta.kind != ElementKind::UnorderedItem {
        return "";
    }
    match meta.checkbox {
        Some(Checkbox::Checked) => "[x] ",
        Some(Checkbox::Unchecked) => "[ ] ",
        None => "",
    }
}

fn push_note(lines: &mut Vec<String>, node: &Node) {
    if let Some(note) = &node.note {
        push_lines(lines, note);
    }
}

/// Push text verbatim, one output line per source line.
fn push_lines(lines: &mut Vec<String>, text: &str) {
    for line in split_lines(text) {
        lines.push(line.to_string());
    }
}
