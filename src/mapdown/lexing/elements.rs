//! Structural elements
//!
//! The transient output of the lexer: one entry per recognized heading,
//! list item or preface block, in source order, each carrying the raw text
//! that followed it up to the next element.

use crate::mapdown::ast::{Checkbox, ElementKind};

/// One lexed structural element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureElement {
    pub kind: ElementKind,
    /// Heading depth (1-6) or list nesting level (`indent/2 + 1`); 0 for preface.
    pub level: usize,
    /// Marker-stripped content (for the preface: the raw block itself).
    pub text: String,
    /// Raw lines between this element and the next, joined with the
    /// document's line ending. `Some("")` is a single blank line; `None`
    /// means the next element followed immediately.
    pub trailing: Option<String>,
    /// The literal marker, e.g. `"##"`, `"-"`, `"3."`.
    pub original_marker: String,
    /// Leading spaces before a list marker.
    pub indent_spaces: Option<usize>,
    /// 0-based source line index.
    pub source_line: usize,
    /// Checkbox state; only set on unordered items.
    pub checkbox: Option<Checkbox>,
}
