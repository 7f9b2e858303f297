//! Line-ending detection and splitting
//!
//! The dominant line ending of the whole document is detected once and used
//! for all joining, both for trailing content during lexing and for the
//! final output during serialization.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// A document's line-ending convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// Detect the dominant line ending by majority count; ties favor `\n`.
    pub fn detect(text: &str) -> Self {
        let crlf = text.matches("\r\n").count();
        let lf = text.matches('\n').count() - crlf;
        let cr = text.matches('\r').count() - crlf;

        if lf >= crlf && lf >= cr {
            LineEnding::Lf
        } else if crlf >= cr {
            LineEnding::CrLf
        } else {
            LineEnding::Cr
        }
    }
}

/// Split text into lines on any of `\r\n`, `\r`, `\n`.
///
/// The trailing empty line of a newline-terminated document is kept; that
/// is what makes serialization reproduce the final newline exactly.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_prefers_majority() {
        assert_eq!(LineEnding::detect("a\nb\nc"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb\r\nc\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\rb\rc"), LineEnding::Cr);
    }

    #[test]
    fn test_detect_tie_favors_lf() {
        assert_eq!(LineEnding::detect("a\r\nb\nc"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn test_split_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_handles_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }
}
