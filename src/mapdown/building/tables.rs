//! Table extraction
//!
//! Locates the first well-formed pipe table inside a block of text and
//! splits it into (before, table, after) segments. The surrounding segments
//! are returned exactly as they appeared, whitespace intact, so the text
//! round-trips. A malformed or partial table is not an error: the primitive
//! just reports that no table was found.

use crate::mapdown::lexing::line_endings::{split_lines, LineEnding};
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator cells are `:?-{3,}:?`, pipe-delimited, at least one cell.
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\|?\s*:?-{3,}:?\s*(?:\|\s*:?-{3,}:?\s*)*\|?\s*$").unwrap());

/// The first pipe table found in a text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTable {
    /// Trimmed header cells.
    pub headers: Vec<String>,
    /// Trimmed data cells, row by row.
    pub rows: Vec<Vec<String>>,
    /// Exact text preceding the table; `None` when the table starts on the
    /// first line, `Some("")` when a single blank line precedes it.
    pub before: Option<String>,
    /// The raw table lines (header, separator, data rows), joined verbatim.
    pub table_block: String,
    /// Exact text following the last data row, same encoding as `before`.
    pub after: Option<String>,
}

/// Extract the first table from `text`.
///
/// A pair of lines qualifies as a table start when the first contains at
/// least one pipe and the second is a separator line; every contiguous
/// pipe-bearing line after them is consumed as a data row. Only the first
/// table is extracted; callers find further tables by feeding the `after`
/// remainder back in.
pub fn extract_first_table(text: &str, line_ending: LineEnding) -> Option<ExtractedTable> {
    let lines = split_lines(text);
    let eol = line_ending.as_str();

    for i in 0..lines.len().saturating_sub(1) {
        if !lines[i].contains('|') || !is_separator_line(lines[i + 1]) {
            continue;
        }

        let mut end = i + 2;
        while end < lines.len() && lines[end].contains('|') {
            end += 1;
        }

        let headers = split_row(lines[i]);
        let rows = lines[i + 2..end].iter().map(|line| split_row(line)).collect();
        let before = (i > 0).then(|| lines[..i].join(eol));
        let after = (end < lines.len()).then(|| lines[end..].join(eol));

        return Some(ExtractedTable {
            headers,
            rows,
            before,
            table_block: lines[i..end].join(eol),
            after,
        });
    }

    None
}

/// A separator line must itself be pipe-delimited; a bare `---` is not one.
fn is_separator_line(line: &str) -> bool {
    line.contains('|') && SEPARATOR.is_match(line)
}

/// Split a table row into trimmed cells, outer pipes stripped.
pub fn split_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);

    line.split('|').map(|cell| cell.trim().to_string()).collect()
}
