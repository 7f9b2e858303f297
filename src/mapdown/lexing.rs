//! Structure lexer
//!
//! Scans a document line by line and emits a flat, ordered sequence of
//! structural elements (headings, list items, preface) with their raw
//! trailing content attached. Hierarchy is resolved later by the builder;
//! the lexer only classifies and accumulates.

pub mod elements;
pub mod line_classification;
pub mod line_endings;
pub mod scanner;

pub use elements::StructureElement;
pub use line_classification::{classify_line, LineClass};
pub use line_endings::{split_lines, LineEnding};
pub use scanner::{scan, ScanOutput};
