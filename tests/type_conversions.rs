//! Integration tests for the structural mutators
//!
//! Exercises the mutators end to end through the serializer, so what is
//! asserted is the text a user would see after the operation.

use mapdown::mapdown::ast::Forest;
use mapdown::mapdown::building::{parse, ParseOptions};
use mapdown::mapdown::error::ConversionError;
use mapdown::mapdown::formats::serialize;
use mapdown::mapdown::transforms::{
    change_indent, change_list_style, change_node_type, renumber_ordered_lists, IndentDirection,
    ListStyle, TargetType,
};
use rstest::rstest;

fn parse_text(text: &str) -> Forest {
    parse(text, &ParseOptions::default()).expect("document parses")
}

#[rstest]
#[case::increase_from_two("## A", IndentDirection::Increase, "### A")]
#[case::increase_at_max("###### A", IndentDirection::Increase, "###### A")]
#[case::decrease_from_three("### A", IndentDirection::Decrease, "## A")]
#[case::decrease_at_min("# A", IndentDirection::Decrease, "# A")]
fn test_heading_level_adjustments(
    #[case] text: &str,
    #[case] direction: IndentDirection,
    #[case] expected: &str,
) {
    let mut forest = parse_text(text);
    let id = forest.roots[0].id.clone();
    change_indent(&mut forest, &id, direction);
    assert_eq!(serialize(&forest), expected);
}

#[rstest]
#[case::indent_nested_item("- a\n  - b", IndentDirection::Increase, "- a\n    - b")]
#[case::outdent_nested_item("- a\n    - b", IndentDirection::Decrease, "- a\n  - b")]
fn test_item_indent_adjustments(
    #[case] text: &str,
    #[case] direction: IndentDirection,
    #[case] expected: &str,
) {
    let mut forest = parse_text(text);
    let id = forest.roots[0].children[0].id.clone();
    change_indent(&mut forest, &id, direction);
    assert_eq!(serialize(&forest), expected);
}

#[rstest]
#[case::to_ordered("# T\n- a", ListStyle::Ordered, "# T\n1. a")]
#[case::to_unordered("# T\n3. a", ListStyle::Unordered, "# T\n- a")]
fn test_list_style_changes(
    #[case] text: &str,
    #[case] style: ListStyle,
    #[case] expected: &str,
) {
    let mut forest = parse_text(text);
    let id = forest.roots[0].children[0].id.clone();
    change_list_style(&mut forest, &id, style);
    assert_eq!(serialize(&forest), expected);
}

#[test]
fn test_heading_with_heading_descendant_rejects_list_conversion() {
    let mut forest = parse_text("# A\nsome note\n## descendant");
    let id = forest.roots[0].id.clone();
    let before = forest.clone();

    let result = change_node_type(&mut forest, &id, TargetType::UnorderedItem);

    assert!(matches!(
        result,
        Err(ConversionError::IllegalDescendant { .. })
    ));
    assert_eq!(forest, before, "a rejected conversion must not mutate");
}

#[test]
fn test_item_with_later_list_sibling_rejects_heading_conversion() {
    let mut forest = parse_text("# T\n- a\n- b\n- c");
    let id = forest.roots[0].children[0].id.clone();
    let before = forest.clone();

    let result = change_node_type(&mut forest, &id, TargetType::Heading);

    assert!(matches!(result, Err(ConversionError::IllegalSibling { .. })));
    assert_eq!(forest, before);
}

#[test]
fn test_trailing_item_converts_to_heading_below_its_section() {
    let mut forest = parse_text("## S\n- a\n- b");
    let id = forest.roots[0].children[1].id.clone();

    change_node_type(&mut forest, &id, TargetType::Heading).unwrap();

    assert_eq!(serialize(&forest), "## S\n- a\n### b");
}

#[test]
fn test_leaf_heading_converts_to_item_of_its_parent() {
    let mut forest = parse_text("# A\n## B\nnote under b");
    let id = forest.roots[0].children[0].id.clone();

    change_node_type(&mut forest, &id, TargetType::OrderedItem).unwrap();

    assert_eq!(serialize(&forest), "# A\n1. B\nnote under b");
}

#[test]
fn test_item_to_item_conversion_nests_under_list_parent() {
    let mut forest = parse_text("- parent\n  - child");
    let id = forest.roots[0].children[0].id.clone();

    change_node_type(&mut forest, &id, TargetType::OrderedItem).unwrap();

    // derived indent is parent indent + 2
    assert_eq!(serialize(&forest), "- parent\n  1. child");
}

#[test]
fn test_renumbering_after_reordering_edits() {
    let mut forest = parse_text("# T\n4. d\n9. e\n1. f");
    renumber_ordered_lists(&mut forest);
    assert_eq!(serialize(&forest), "# T\n1. d\n2. e\n3. f");
}

#[test]
fn test_renumbering_recurses_into_nested_lists() {
    let mut forest = parse_text("1. outer\n  7. inner one\n  9. inner two\n2. outer two");
    renumber_ordered_lists(&mut forest);
    assert_eq!(
        serialize(&forest),
        "1. outer\n  1. inner one\n  2. inner two\n2. outer two"
    );
}
