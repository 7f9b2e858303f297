//! Unit tests for table extraction inside documents
//!
//! Tables found in trailing content become sibling nodes, never children;
//! the raw block must survive byte-for-byte, and malformed tables must
//! degrade to ordinary trailing text.

use mapdown::mapdown::ast::Forest;
use mapdown::mapdown::building::{parse, ParseOptions};
use mapdown::mapdown::formats::serialize;
use mapdown::mapdown::testing::assert_forest;

fn parse_text(text: &str) -> Forest {
    parse(text, &ParseOptions::default()).expect("document parses")
}

#[test]
fn test_table_after_heading_becomes_sibling_root() {
    let forest = parse_text("# A\n\n| h1 | h2 |\n|---|---|\n| a | b |\n\n# B\n");

    assert_forest(&forest)
        .root_count(3)
        .root(0, |a| {
            // the blank line before the table stays as the heading's note
            a.text("A").is_heading(1).note_is("").child_count(0);
        })
        .root(1, |table| {
            table.is_table().text("| h1 | h2 |\n|---|---|\n| a | b |");
        })
        .root(2, |b| {
            b.text("B").is_heading(1);
        });
}

#[test]
fn test_table_in_item_note_stays_inside_the_item_scope() {
    let forest = parse_text("# T\n- item\n| h |\n|---|\n| v |\n- next");

    assert_forest(&forest).root_count(1).root(0, |root| {
        root.child_count(3)
            .child(0, |item| {
                item.text("item").has_no_note();
            })
            .child(1, |table| {
                table.is_table().text("| h |\n|---|\n| v |");
            })
            .child(2, |next| {
                next.text("next");
            });
    });
}

#[test]
fn test_two_tables_in_one_note_chain_as_siblings() {
    let forest = parse_text(
        "# A\n| a |\n|---|\n| 1 |\nbetween\n| b |\n|---|\n| 2 |",
    );

    assert_forest(&forest)
        .root_count(3)
        .root(0, |a| {
            a.text("A").has_no_note();
        })
        .root(1, |first| {
            first.is_table().text("| a |\n|---|\n| 1 |").note_is("between");
        })
        .root(2, |second| {
            second.is_table().text("| b |\n|---|\n| 2 |").has_no_note();
        });
}

#[test]
fn test_malformed_separator_stays_in_note() {
    let forest = parse_text("# A\n| h1 | h2 |\n|--|--|\n| a | b |");

    assert_forest(&forest).root_count(1).root(0, |a| {
        a.text("A").note_is("| h1 | h2 |\n|--|--|\n| a | b |");
    });
}

#[test]
fn test_table_cells_are_parsed_into_the_grid() {
    let forest = parse_text("# A\n| h1 | h2 |\n|---|---|\n| a | b |\n| c | d |");

    let table = &forest.roots[1];
    match &table.variant {
        mapdown::mapdown::ast::Variant::Table { info } => {
            assert_eq!(info.headers, vec!["h1", "h2"]);
            assert_eq!(
                info.rows,
                vec![vec!["a", "b"], vec!["c", "d"]]
            );
        }
        other => panic!("expected table variant, found {other:?}"),
    }
}

#[test]
fn test_preface_table_becomes_second_root() {
    let forest = parse_text("intro\n| h |\n|---|\n| v |\n# A");

    assert_forest(&forest)
        .root_count(3)
        .root(0, |preface| {
            preface.is_preface().note_is("intro");
        })
        .root(1, |table| {
            table.is_table().text("| h |\n|---|\n| v |");
        })
        .root(2, |a| {
            a.text("A");
        });
}

#[test]
fn test_document_with_table_round_trips_exactly() {
    let text = "# A\n\n| h1 | h2 |\n|---|---|\n| a | b |\n\n# B\n";
    let forest = parse_text(text);
    assert_eq!(serialize(&forest), text);
}
