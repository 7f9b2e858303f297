//! Line Classification
//!
//! Core classification logic for single lines. Classification order
//! matters: headings first, then unordered items, then ordered items;
//! everything else is plain text (which the scanner folds into preface or
//! trailing content).

use crate::mapdown::ast::Checkbox;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6}) (.*)$").unwrap());
static UNORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( *)([-*+]) (.*)$").unwrap());
static ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( *)(\d+\.) (.*)$").unwrap());
static CHECKBOX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[( |x|X)\] ?(.*)$").unwrap());

/// The classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Heading {
        level: usize,
        text: String,
    },
    UnorderedItem {
        indent_spaces: usize,
        marker: String,
        checkbox: Option<Checkbox>,
        text: String,
    },
    OrderedItem {
        indent_spaces: usize,
        marker: String,
        text: String,
    },
    /// Anything else, blank lines included.
    Text,
}

/// Classify one line.
///
/// A heading is 1-6 `#` followed by a space; seven or more hashes, or a
/// missing space, make the line plain text. List markers require a space
/// after the marker, and only space indentation counts (a tab-indented
/// marker is plain text).
pub fn classify_line(line: &str) -> LineClass {
    if let Some(caps) = HEADING.captures(line) {
        return LineClass::Heading {
            level: caps[1].len(),
            text: caps[2].to_string(),
        };
    }

    if let Some(caps) = UNORDERED.captures(line) {
        let (checkbox, text) = strip_checkbox(&caps[3]);
        return LineClass::UnorderedItem {
            indent_spaces: caps[1].len(),
            marker: caps[2].to_string(),
            checkbox,
            text,
        };
    }

    if let Some(caps) = ORDERED.captures(line) {
        return LineClass::OrderedItem {
            indent_spaces: caps[1].len(),
            marker: caps[2].to_string(),
            text: caps[3].to_string(),
        };
    }

    LineClass::Text
}

/// Split a `[ ]` / `[x]` / `[X]` checkbox marker off item content.
fn strip_checkbox(content: &str) -> (Option<Checkbox>, String) {
    match CHECKBOX.captures(content) {
        Some(caps) => {
            let checkbox = Checkbox::from_checked(&caps[1] != " ");
            (Some(checkbox), caps[2].to_string())
        }
        None => (None, content.to_string()),
    }
}
