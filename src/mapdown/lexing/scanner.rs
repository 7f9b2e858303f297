//! Scanner
//!
//! Single-pass state machine over the document's lines. Before the first
//! structural element it accumulates preface lines; afterwards it
//! accumulates trailing content for the current element. Emits the flat
//! element sequence the hierarchy builder consumes.

use crate::mapdown::ast::ElementKind;
use crate::mapdown::error::StructureError;
use crate::mapdown::lexing::elements::StructureElement;
use crate::mapdown::lexing::line_classification::{classify_line, LineClass};
use crate::mapdown::lexing::line_endings::{split_lines, LineEnding};
use tracing::debug;

/// Lexer output: the element sequence and the detected line ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub elements: Vec<StructureElement>,
    pub line_ending: LineEnding,
}

/// Scan a document into structural elements.
///
/// Fails with [`StructureError::NoStructuralElements`] when the document
/// contains no heading or list item at all; a preface alone is not a
/// document.
pub fn scan(text: &str) -> Result<ScanOutput, StructureError> {
    let line_ending = LineEnding::detect(text);
    let lines = split_lines(text);

    let mut elements: Vec<StructureElement> = Vec::new();
    let mut preface_lines: Vec<&str> = Vec::new();
    let mut current: Option<(StructureElement, Vec<&str>)> = None;

    for (index, line) in lines.into_iter().enumerate() {
        match classify_line(line) {
            LineClass::Text => match current.as_mut() {
                Some((_, trailing)) => trailing.push(line),
                None => preface_lines.push(line),
            },
            class => {
                if let Some((mut element, trailing)) = current.take() {
                    element.trailing = join_trailing(trailing, line_ending);
                    elements.push(element);
                } else {
                    // First structural element: flush the preface, if any
                    let preface = preface_lines.join(line_ending.as_str());
                    if !preface.is_empty() {
                        elements.push(preface_element(preface));
                    }
                }
                current = Some((element_from_class(class, index), Vec::new()));
            }
        }
    }

    match current.take() {
        Some((mut element, trailing)) => {
            element.trailing = join_trailing(trailing, line_ending);
            elements.push(element);
        }
        None => return Err(StructureError::NoStructuralElements),
    }

    debug!(elements = elements.len(), ?line_ending, "lexed structural elements");
    Ok(ScanOutput {
        elements,
        line_ending,
    })
}

/// `None` when no lines followed the element; `Some("")` is one blank line.
fn join_trailing(lines: Vec<&str>, line_ending: LineEnding) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        Some(lines.join(line_ending.as_str()))
    }
}

fn element_from_class(class: LineClass, source_line: usize) -> StructureElement {
    match class {
        LineClass::Heading { level, text } => StructureElement {
            kind: ElementKind::Heading,
            level,
            text,
            trailing: None,
            original_marker: "#".repeat(level),
            indent_spaces: None,
            source_line,
            checkbox: None,
        },
        LineClass::UnorderedItem {
            indent_spaces,
            marker,
            checkbox,
            text,
        } => StructureElement {
            kind: ElementKind::UnorderedItem,
            level: indent_spaces / 2 + 1,
            text,
            trailing: None,
            original_marker: marker,
            indent_spaces: Some(indent_spaces),
            source_line,
            checkbox,
        },
        LineClass::OrderedItem {
            indent_spaces,
            marker,
            text,
        } => StructureElement {
            kind: ElementKind::OrderedItem,
            level: indent_spaces / 2 + 1,
            text,
            trailing: None,
            original_marker: marker,
            indent_spaces: Some(indent_spaces),
            source_line,
            checkbox: None,
        },
        LineClass::Text => unreachable!("text lines never start an element"),
    }
}

fn preface_element(text: String) -> StructureElement {
    StructureElement {
        kind: ElementKind::Preface,
        level: 0,
        text,
        trailing: None,
        original_marker: String::new(),
        indent_spaces: None,
        source_line: 0,
        checkbox: None,
    }
}
