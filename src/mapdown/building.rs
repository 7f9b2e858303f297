//! Hierarchy construction
//!
//! Consumes the lexer's element sequence and produces the forest, resolving
//! parent/child relationships with two explicit stacks (one for headings,
//! one for list items) and extracting pipe tables out of trailing content.

pub mod builder;
pub mod tables;

pub use builder::{build_forest, ParseOptions, DEFAULT_COLLAPSE_DEPTH};
pub use tables::{extract_first_table, ExtractedTable};

use crate::mapdown::ast::Forest;
use crate::mapdown::error::StructureError;
use crate::mapdown::lexing::scan;

/// Parse structured text into a forest.
///
/// Fails only when the document contains no structural elements at all;
/// every other input shape (malformed tables included) parses.
pub fn parse(text: &str, options: &ParseOptions) -> Result<Forest, StructureError> {
    let output = scan(text)?;
    Ok(build_forest(output.elements, output.line_ending, options))
}
