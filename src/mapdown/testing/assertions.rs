//! Fluent forest assertions
//!
//! Entry point is [`assert_forest`]; every failure message carries the path
//! of the node it refers to (e.g. `roots[0].children[2]`).

use crate::mapdown::ast::{Checkbox, ElementKind, Forest, Node};

/// Start asserting on a forest.
pub fn assert_forest(forest: &Forest) -> ForestAssert<'_> {
    ForestAssert { forest }
}

pub struct ForestAssert<'a> {
    forest: &'a Forest,
}

impl<'a> ForestAssert<'a> {
    pub fn root_count(self, expected: usize) -> Self {
        assert_eq!(
            self.forest.roots.len(),
            expected,
            "expected {} roots, found {}",
            expected,
            self.forest.roots.len()
        );
        self
    }

    pub fn root(self, index: usize, check: impl FnOnce(NodeAssert<'_>)) -> Self {
        let node = self
            .forest
            .roots
            .get(index)
            .unwrap_or_else(|| panic!("no root at index {index}"));
        check(NodeAssert {
            node,
            path: format!("roots[{index}]"),
        });
        self
    }
}

pub struct NodeAssert<'a> {
    node: &'a Node,
    path: String,
}

impl<'a> NodeAssert<'a> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text, expected,
            "{}: expected text {:?}, found {:?}",
            self.path, expected, self.node.text
        );
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        assert!(
            self.node.text.contains(needle),
            "{}: text {:?} does not contain {:?}",
            self.path,
            self.node.text,
            needle
        );
        self
    }

    pub fn note_is(self, expected: &str) -> Self {
        assert_eq!(
            self.node.note.as_deref(),
            Some(expected),
            "{}: expected note {:?}, found {:?}",
            self.path,
            expected,
            self.node.note
        );
        self
    }

    pub fn has_no_note(self) -> Self {
        assert!(
            self.node.note.is_none(),
            "{}: expected no note, found {:?}",
            self.path,
            self.node.note
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: expected {} children, found {}",
            self.path,
            expected,
            self.node.children.len()
        );
        self
    }

    pub fn child(self, index: usize, check: impl FnOnce(NodeAssert<'_>)) -> Self {
        let child = self
            .node
            .children
            .get(index)
            .unwrap_or_else(|| panic!("{}: no child at index {index}", self.path));
        check(NodeAssert {
            node: child,
            path: format!("{}.children[{index}]", self.path),
        });
        self
    }

    pub fn is_heading(self, level: usize) -> Self {
        let meta = self.expect_meta("heading");
        assert_eq!(
            meta.kind,
            ElementKind::Heading,
            "{}: expected a heading, found {:?}",
            self.path,
            meta.kind
        );
        assert_eq!(
            meta.level, level,
            "{}: expected heading level {}, found {}",
            self.path, level, meta.level
        );
        self
    }

    pub fn is_unordered(self) -> Self {
        let meta = self.expect_meta("unordered item");
        assert_eq!(
            meta.kind,
            ElementKind::UnorderedItem,
            "{}: expected an unordered item, found {:?}",
            self.path,
            meta.kind
        );
        self
    }

    pub fn is_ordered(self) -> Self {
        let meta = self.expect_meta("ordered item");
        assert_eq!(
            meta.kind,
            ElementKind::OrderedItem,
            "{}: expected an ordered item, found {:?}",
            self.path,
            meta.kind
        );
        self
    }

    pub fn is_checkbox(self, checked: bool) -> Self {
        let meta = self.expect_meta("checkbox item");
        assert_eq!(
            meta.checkbox,
            Some(Checkbox::from_checked(checked)),
            "{}: expected checkbox checked={}, found {:?}",
            self.path,
            checked,
            meta.checkbox
        );
        self
    }

    pub fn is_table(self) -> Self {
        assert!(
            self.node.variant.is_table(),
            "{}: expected a table node",
            self.path
        );
        self
    }

    pub fn is_preface(self) -> Self {
        assert!(
            self.node.is_preface(),
            "{}: expected the preface node",
            self.path
        );
        self
    }

    pub fn marker(self, expected: &str) -> Self {
        let meta = self.expect_meta("marker");
        assert_eq!(
            meta.original_marker, expected,
            "{}: expected marker {:?}, found {:?}",
            self.path, expected, meta.original_marker
        );
        self
    }

    pub fn indent(self, expected: usize) -> Self {
        let meta = self.expect_meta("indent");
        assert_eq!(
            meta.indent_spaces,
            Some(expected),
            "{}: expected indent {}, found {:?}",
            self.path,
            expected,
            meta.indent_spaces
        );
        self
    }

    fn expect_meta(&self, what: &str) -> &crate::mapdown::ast::StructuralMeta {
        self.node
            .meta()
            .unwrap_or_else(|| panic!("{}: expected {} but node has no metadata", self.path, what))
    }
}
