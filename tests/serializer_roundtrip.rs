//! Round-trip tests for the serializer
//!
//! The contract is a fixpoint: parsing a document and serializing it once
//! may normalize cosmetic spellings (bullet style, checkbox case, stray
//! indentation), but serializing the reparsed output must reproduce the
//! first serialization exactly. Canonical documents round-trip unchanged.

use mapdown::mapdown::building::{parse, ParseOptions};
use mapdown::mapdown::formats::serialize;

/// Serialize, reparse, serialize again; assert the two outputs agree and
/// return the first for further checks.
fn fixpoint(text: &str) -> String {
    let options = ParseOptions::default();
    let first = serialize(&parse(text, &options).expect("document parses"));
    let second = serialize(&parse(&first, &options).expect("serialized output parses"));
    assert_eq!(first, second, "serialization is not a fixpoint for {text:?}");
    first
}

#[test]
fn test_canonical_headings_round_trip_exactly() {
    let text = "# A\n## B\n# C\n";
    assert_eq!(fixpoint(text), text);
}

#[test]
fn test_canonical_checkbox_list_round_trips_exactly() {
    let text = "# T\n- [ ] a\n- [x] b\n";
    assert_eq!(fixpoint(text), text);
}

#[test]
fn test_nested_list_round_trips_exactly() {
    let text = "# Plan\n- a\n  - b\n    - c\n- d";
    assert_eq!(fixpoint(text), text);
}

#[test]
fn test_ordered_list_with_sub_item_round_trips_exactly() {
    let text = "# T\n1. one\n2. two\n  - sub";
    assert_eq!(fixpoint(text), text);
}

#[test]
fn test_notes_and_blank_lines_round_trip_exactly() {
    let text = "# A\nnote\n\nmore note\n## B\n- x\nitem note\n";
    assert_eq!(fixpoint(text), text);
}

#[test]
fn test_crlf_document_round_trips_exactly() {
    let text = "# A\r\n- b\r\n- c\r\n";
    assert_eq!(fixpoint(text), text);
}

#[test]
fn test_preface_and_table_round_trip_exactly() {
    let text = "lead-in\n# A\n\n| h1 | h2 |\n|---|---|\n| a | b |\n\n# B\n";
    assert_eq!(fixpoint(text), text);
}

#[test]
fn test_bullet_styles_normalize_to_dashes() {
    assert_eq!(fixpoint("* star\n+ plus"), "- star\n- plus");
}

#[test]
fn test_uppercase_checkbox_normalizes() {
    assert_eq!(fixpoint("- [X] done"), "- [x] done");
}

#[test]
fn test_indent_under_heading_normalizes_to_column_zero() {
    assert_eq!(fixpoint("# H\n    - x"), "# H\n- x");
}

#[test]
fn test_normalization_snapshot() {
    let forest = parse("* star\n+ plus\n- [X] done\n   - odd", &ParseOptions::default()).unwrap();
    insta::assert_snapshot!(serialize(&forest), @r"
    - star
    - plus
    - [x] done
       - odd
    ");
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// Lines a well-formed document is made of.
    fn structured_line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            // Headings
            "#{1,3} [a-z]{1,8}",
            // Unordered items at a few indents
            "- [a-z]{1,8}",
            "  - [a-z]{1,8}",
            "    - [a-z]{1,8}",
            // Ordered items
            "[0-9]{1,2}\\. [a-z]{1,8}",
            // Checkboxes
            "- \\[x\\] [a-z]{1,8}",
            "- \\[ \\] [a-z]{1,8}",
            // Plain prose and blank lines
            "[a-z][a-z ]{0,10}",
            Just(String::new()),
            // A canonical pipe table
            Just("| h1 | h2 |\n|---|---|\n| a | b |".to_string()),
        ]
    }

    fn document_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(structured_line_strategy(), 0..20)
            .prop_map(|lines| format!("# doc\n{}", lines.join("\n")))
    }

    /// Arbitrary soup of marker-ish characters; most lines are garbage.
    fn arbitrary_document_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec("[-#*+0-9a-z\\[\\]|:. \\t]{0,12}", 0..15)
            .prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn test_parse_never_panics(input in arbitrary_document_strategy()) {
            let _ = parse(&input, &ParseOptions::default());
        }

        #[test]
        fn test_generated_documents_reach_a_fixpoint(input in document_strategy()) {
            let options = ParseOptions::default();
            let first = serialize(&parse(&input, &options).expect("generated documents parse"));
            let second = serialize(&parse(&first, &options).expect("serialized output parses"));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_any_parsable_input_reaches_a_fixpoint(input in arbitrary_document_strategy()) {
            let options = ParseOptions::default();
            if let Ok(forest) = parse(&input, &options) {
                let first = serialize(&forest);
                let second =
                    serialize(&parse(&first, &options).expect("serialized output parses"));
                prop_assert_eq!(first, second);
            }
        }
    }
}
