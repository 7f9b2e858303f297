//! Structural metadata
//!
//! Describes the structural role a node had in the source text: what kind
//! of element it was, at which level, and with which literal marker. Nodes
//! created directly on the canvas have no metadata until they are assigned
//! a structural role.

use serde::{Deserialize, Serialize};

/// The structural element kinds recognized in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// ATX heading, levels 1 through 6.
    Heading,
    /// Bulleted list item (`-`, `*` or `+`).
    UnorderedItem,
    /// Numbered list item (`1.`, `2.`, ...).
    OrderedItem,
    /// Free-floating text before the first heading or list item.
    Preface,
}

impl ElementKind {
    /// Whether this kind is a list item of either ordering style.
    pub fn is_list_item(self) -> bool {
        matches!(self, ElementKind::UnorderedItem | ElementKind::OrderedItem)
    }
}

/// Checkbox state on an unordered list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Checkbox {
    Unchecked,
    Checked,
}

impl Checkbox {
    pub fn is_checked(self) -> bool {
        matches!(self, Checkbox::Checked)
    }

    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Checkbox::Checked
        } else {
            Checkbox::Unchecked
        }
    }
}

/// Structural metadata attached to nodes that originate from the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralMeta {
    pub kind: ElementKind,
    /// Heading depth (1-6) or list nesting level (>= 1); 0 for the preface.
    pub level: usize,
    /// The literal marker as it appeared in the source, e.g. `"##"`, `"-"`, `"3."`.
    pub original_marker: String,
    /// Leading spaces before a list marker; absent for headings and preface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_spaces: Option<usize>,
    /// 0-based line index in the source the element was lexed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_line: Option<usize>,
    /// Checkbox state; only ever present on unordered items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox: Option<Checkbox>,
}

impl StructuralMeta {
    /// Metadata for a heading of the given level (clamped to 1-6).
    pub fn heading(level: usize) -> Self {
        let level = level.clamp(1, 6);
        Self {
            kind: ElementKind::Heading,
            level,
            original_marker: "#".repeat(level),
            indent_spaces: None,
            source_line: None,
            checkbox: None,
        }
    }

    /// Metadata for an unordered item at the given indentation.
    pub fn unordered(indent_spaces: usize) -> Self {
        Self {
            kind: ElementKind::UnorderedItem,
            level: indent_spaces / 2 + 1,
            original_marker: "-".to_string(),
            indent_spaces: Some(indent_spaces),
            source_line: None,
            checkbox: None,
        }
    }

    /// Metadata for an ordered item at the given indentation.
    pub fn ordered(indent_spaces: usize) -> Self {
        Self {
            kind: ElementKind::OrderedItem,
            level: indent_spaces / 2 + 1,
            original_marker: "1.".to_string(),
            indent_spaces: Some(indent_spaces),
            source_line: None,
            checkbox: None,
        }
    }

    /// Metadata for the preface pseudo-element.
    pub fn preface() -> Self {
        Self {
            kind: ElementKind::Preface,
            level: 0,
            original_marker: String::new(),
            indent_spaces: None,
            source_line: Some(0),
            checkbox: None,
        }
    }
}

/// Check whether a marker is a numbered-list marker like `"12."`.
///
/// Ordered items keep their literal source marker; on serialization only
/// markers of this shape are reused, anything else falls back to `"1."`.
pub fn is_numeric_marker(marker: &str) -> bool {
    match marker.strip_suffix('.') {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_is_clamped() {
        assert_eq!(StructuralMeta::heading(0).level, 1);
        assert_eq!(StructuralMeta::heading(9).level, 6);
        assert_eq!(StructuralMeta::heading(3).original_marker, "###");
    }

    #[test]
    fn test_list_level_rounds_down() {
        // 2-space steps; odd indents round down
        assert_eq!(StructuralMeta::unordered(0).level, 1);
        assert_eq!(StructuralMeta::unordered(2).level, 2);
        assert_eq!(StructuralMeta::unordered(3).level, 2);
        assert_eq!(StructuralMeta::unordered(5).level, 3);
    }

    #[test]
    fn test_numeric_marker_detection() {
        assert!(is_numeric_marker("1."));
        assert!(is_numeric_marker("42."));
        assert!(!is_numeric_marker("-"));
        assert!(!is_numeric_marker("a."));
        assert!(!is_numeric_marker("."));
        assert!(!is_numeric_marker("1"));
    }
}
