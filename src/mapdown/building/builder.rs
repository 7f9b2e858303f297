//! Forest builder
//!
//! Builds the node forest from the flat element sequence. Two explicit
//! stacks resolve nesting: the heading stack tracks open heading scopes,
//! the list stack tracks open list indentation levels. A heading always
//! terminates any open list nesting; a list item never closes a heading
//! scope, only deeper-or-equal list items.
//!
//! Nodes are assembled in an index arena first and materialized into an
//! owned tree at the end; children always have a larger index than their
//! parent, so materialization is a single reverse pass with no recursion.

use crate::mapdown::ast::{ElementKind, Forest, Node, StructuralMeta, TableInfo};
use crate::mapdown::building::tables::{extract_first_table, ExtractedTable};
use crate::mapdown::lexing::{LineEnding, StructureElement};
use tracing::debug;

/// Documents with more structural elements than this get deep headings
/// marked collapsed as a cosmetic starting state.
const AUTO_COLLAPSE_THRESHOLD: usize = 30;

/// Ceiling on tracked list nesting; deeper items attach at the ceiling.
/// Their stored indentation still serializes verbatim.
const MAX_LIST_DEPTH: usize = 64;

/// Heading-stack depth at which auto-collapse starts, unless overridden.
pub const DEFAULT_COLLAPSE_DEPTH: usize = 2;

/// Options accepted by [`crate::mapdown::building::parse`].
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Heading-stack depth at which auto-collapse marks headings collapsed.
    pub collapse_depth: usize,
    /// Opaque hints forwarded to the layout pass; parsing never reads them.
    pub layout_hints: Option<serde_json::Value>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            collapse_depth: DEFAULT_COLLAPSE_DEPTH,
            layout_hints: None,
        }
    }
}

/// Build a forest from lexed elements.
pub fn build_forest(
    elements: Vec<StructureElement>,
    line_ending: LineEnding,
    options: &ParseOptions,
) -> Forest {
    let mut builder = ForestBuilder::new(line_ending);
    for element in &elements {
        builder.push(element);
    }
    builder.finish(options)
}

struct Slot {
    node: Option<Node>,
    children: Vec<usize>,
    /// Heading-stack depth at creation; used by auto-collapse.
    heading_depth: Option<usize>,
}

struct ForestBuilder {
    line_ending: LineEnding,
    slots: Vec<Slot>,
    roots: Vec<usize>,
    heading_stack: Vec<(usize, usize)>,
    list_stack: Vec<(usize, usize)>,
    current_heading: Option<usize>,
    structural_count: usize,
}

impl ForestBuilder {
    fn new(line_ending: LineEnding) -> Self {
        Self {
            line_ending,
            slots: Vec::new(),
            roots: Vec::new(),
            heading_stack: Vec::new(),
            list_stack: Vec::new(),
            current_heading: None,
            structural_count: 0,
        }
    }

    fn push(&mut self, element: &StructureElement) {
        match element.kind {
            ElementKind::Preface => self.push_preface(element),
            ElementKind::Heading => self.push_heading(element),
            ElementKind::UnorderedItem | ElementKind::OrderedItem => self.push_list_item(element),
        }
    }

    fn push_preface(&mut self, element: &StructureElement) {
        let mut node = Node::new_structural(String::new(), StructuralMeta::preface());
        node.note = Some(element.text.clone());
        let idx = self.alloc(node);
        // The preface always renders first, regardless of arrival order
        self.roots.insert(0, idx);
        self.extract_tables(idx, None);
    }

    fn push_heading(&mut self, element: &StructureElement) {
        self.structural_count += 1;
        while self
            .heading_stack
            .last()
            .is_some_and(|&(_, level)| level >= element.level)
        {
            self.heading_stack.pop();
        }
        // A new heading terminates any open list nesting
        self.list_stack.clear();

        let idx = self.alloc(node_from_element(element));
        let parent = self.heading_stack.last().map(|&(slot, _)| slot);
        self.attach(idx, parent);
        self.heading_stack.push((idx, element.level));
        self.slots[idx].heading_depth = Some(self.heading_stack.len());
        self.current_heading = Some(idx);
        self.extract_tables(idx, parent);
    }

    fn push_list_item(&mut self, element: &StructureElement) {
        self.structural_count += 1;
        let indent = element.indent_spaces.unwrap_or(0);
        while self
            .list_stack
            .last()
            .is_some_and(|&(_, top)| top >= indent)
        {
            self.list_stack.pop();
        }

        let parent = self
            .list_stack
            .last()
            .map(|&(slot, _)| slot)
            .or(self.current_heading);
        let idx = self.alloc(node_from_element(element));
        self.attach(idx, parent);
        if self.list_stack.len() < MAX_LIST_DEPTH {
            self.list_stack.push((idx, indent));
        }
        self.extract_tables(idx, parent);
    }

    /// Pull every table out of the node's note, inserting table nodes as
    /// siblings immediately after it. The first table's preceding text
    /// stays as the node's note; text between and after tables becomes the
    /// note of the table node preceding it.
    fn extract_tables(&mut self, owner: usize, parent: Option<usize>) {
        let Some(note) = self.node_mut(owner).note.take() else {
            return;
        };
        let Some(first) = extract_first_table(&note, self.line_ending) else {
            self.node_mut(owner).note = Some(note);
            return;
        };

        let ExtractedTable {
            headers,
            rows,
            before,
            table_block,
            after,
        } = first;
        self.node_mut(owner).note = before;

        let mut anchor = owner;
        let mut pending = Some((headers, rows, table_block, after));
        while let Some((headers, rows, table_block, after)) = pending.take() {
            let table = Node::new_table(table_block, TableInfo { headers, rows });
            let idx = self.alloc(table);
            self.insert_after(anchor, idx, parent);
            anchor = idx;

            if let Some(rest) = after {
                match extract_first_table(&rest, self.line_ending) {
                    Some(next) => {
                        let ExtractedTable {
                            headers,
                            rows,
                            before,
                            table_block,
                            after,
                        } = next;
                        self.node_mut(idx).note = before;
                        pending = Some((headers, rows, table_block, after));
                    }
                    None => self.node_mut(idx).note = Some(rest),
                }
            }
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        self.slots.push(Slot {
            node: Some(node),
            children: Vec::new(),
            heading_depth: None,
        });
        self.slots.len() - 1
    }

    fn attach(&mut self, idx: usize, parent: Option<usize>) {
        match parent {
            Some(p) => self.slots[p].children.push(idx),
            None => self.roots.push(idx),
        }
    }

    fn insert_after(&mut self, anchor: usize, new_idx: usize, parent: Option<usize>) {
        let list = match parent {
            Some(p) => &mut self.slots[p].children,
            None => &mut self.roots,
        };
        let position = list
            .iter()
            .position(|&i| i == anchor)
            .expect("anchor is attached to its parent");
        list.insert(position + 1, new_idx);
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.slots[idx].node.as_mut().expect("node still in slot")
    }

    fn finish(mut self, options: &ParseOptions) -> Forest {
        if self.structural_count > AUTO_COLLAPSE_THRESHOLD {
            for slot in &mut self.slots {
                if slot
                    .heading_depth
                    .is_some_and(|depth| depth >= options.collapse_depth)
                {
                    slot.node.as_mut().expect("node still in slot").layout.collapsed = true;
                }
            }
        }

        // Children always carry a larger index than their parent; walking
        // the arena backwards materializes every subtree bottom-up.
        for idx in (0..self.slots.len()).rev() {
            let child_indices = std::mem::take(&mut self.slots[idx].children);
            let children: Vec<Node> = child_indices
                .into_iter()
                .map(|c| self.slots[c].node.take().expect("child taken exactly once"))
                .collect();
            self.slots[idx]
                .node
                .as_mut()
                .expect("node still in slot")
                .children = children;
        }

        let root_indices = std::mem::take(&mut self.roots);
        let mut roots: Vec<Node> = root_indices
            .into_iter()
            .map(|r| self.slots[r].node.take().expect("root taken exactly once"))
            .collect();

        if let Some(first) = roots.first_mut() {
            first.layout.line_ending = Some(self.line_ending);
        }

        debug!(roots = roots.len(), "built forest");
        Forest::new(roots)
    }
}

fn node_from_element(element: &StructureElement) -> Node {
    let meta = StructuralMeta {
        kind: element.kind,
        level: element.level,
        original_marker: element.original_marker.clone(),
        indent_spaces: element.indent_spaces,
        source_line: Some(element.source_line),
        checkbox: element.checkbox,
    };
    let mut node = Node::new_structural(element.text.clone(), meta);
    node.note = element.trailing.clone();
    node
}
