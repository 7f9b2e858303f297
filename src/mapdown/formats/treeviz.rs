//! Treeviz formatter for forests
//!
//! One line per node, structure encoded as 2-space indentation, a small
//! icon per node kind and the label truncated for quick scanning. Debug
//! output for humans; never parsed back.
//!
//! Icons:
//!     Heading: §
//!     Unordered item: • (☐ / ☑ when it is a checkbox)
//!     Ordered item: ∘
//!     Table: ▦
//!     Preface: ¶
//!     Plain node: ◦

use crate::mapdown::ast::{Checkbox, ElementKind, Forest, Node, Variant};

const MAX_LABEL_CHARS: usize = 40;

/// Render a forest as an indented one-line-per-node tree.
pub fn render(forest: &Forest) -> String {
    let mut output = String::new();
    let mut stack: Vec<(&Node, usize)> = forest.roots.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        output.push_str(&"  ".repeat(depth));
        output.push_str(icon(node));
        output.push(' ');
        output.push_str(&truncate(label(node), MAX_LABEL_CHARS));
        output.push('\n');
        for child in node.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    output
}

fn icon(node: &Node) -> &'static str {
    match &node.variant {
        Variant::Table { .. } => "▦",
        Variant::Plain { meta: None } => "◦",
        Variant::Plain { meta: Some(meta) } => match meta.kind {
            ElementKind::Heading => "§",
            ElementKind::UnorderedItem => match meta.checkbox {
                Some(Checkbox::Checked) => "☑",
                Some(Checkbox::Unchecked) => "☐",
                None => "•",
            },
            ElementKind::OrderedItem => "∘",
            ElementKind::Preface => "¶",
        },
    }
}

/// First line of whatever best describes the node.
fn label(node: &Node) -> &str {
    let text = if node.is_preface() {
        node.note.as_deref().unwrap_or("")
    } else {
        node.text.as_str()
    };
    text.lines().next().unwrap_or("")
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}
