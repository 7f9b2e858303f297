//! Node element
//!
//! A node is one entry in the map: a line of text, an optional verbatim
//! note, child nodes in document order, and a variant that says whether the
//! node is plain content or a raw table block. The two shapes are a tagged
//! enum so every consumer matches them exhaustively instead of probing
//! optional fields.

use crate::mapdown::ast::meta::StructuralMeta;
use crate::mapdown::lexing::LineEnding;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Opaque, globally unique node identifier.
///
/// Generated once when a node is created and immutable afterwards; merges
/// transplant existing ids onto fresh content instead of minting new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Mint a fresh id.
    pub fn generate() -> Self {
        NodeId(Ulid::new().to_string())
    }

    /// Wrap an existing id string (persistence, tests).
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed cell grid of a table node.
///
/// The raw block in `Node::text` is authoritative for serialization; the
/// grid is carried for the table editing UI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableInfo {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The two node shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum Variant {
    /// Ordinary content; metadata is absent for nodes created on the canvas.
    Plain {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<StructuralMeta>,
    },
    /// A raw pipe-table block; `Node::text` holds the block verbatim.
    Table { info: TableInfo },
}

impl Variant {
    /// The structural metadata, if this is a plain node that has any.
    pub fn meta(&self) -> Option<&StructuralMeta> {
        match self {
            Variant::Plain { meta } => meta.as_ref(),
            Variant::Table { .. } => None,
        }
    }

    pub fn meta_mut(&mut self) -> Option<&mut StructuralMeta> {
        match self {
            Variant::Plain { meta } => meta.as_mut(),
            Variant::Table { .. } => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Variant::Table { .. })
    }
}

/// Cosmetic data owned by the UI and layout layers.
///
/// The converter defaults these on creation, transplants them during merges
/// and otherwise passes them through untouched. It never computes a
/// coordinate itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Opaque font/style attributes set by the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,
    /// Line-ending convention; recorded on the first root at parse time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_ending: Option<LineEnding>,
    /// Cosmetic hint that the node starts collapsed in the diagram view.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
}

/// One node of the forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub text: String,
    /// Verbatim trailing text rendered under the node, line endings intact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub variant: Variant,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// A plain node with no structural role (canvas-created).
    pub fn new_plain(text: impl Into<String>) -> Self {
        Self {
            id: NodeId::generate(),
            text: text.into(),
            note: None,
            variant: Variant::Plain { meta: None },
            layout: Layout::default(),
            children: Vec::new(),
        }
    }

    /// A node carrying a structural role.
    pub fn new_structural(text: impl Into<String>, meta: StructuralMeta) -> Self {
        Self {
            id: NodeId::generate(),
            text: text.into(),
            note: None,
            variant: Variant::Plain { meta: Some(meta) },
            layout: Layout::default(),
            children: Vec::new(),
        }
    }

    /// A table node holding a raw pipe-table block.
    pub fn new_table(block: impl Into<String>, info: TableInfo) -> Self {
        Self {
            id: NodeId::generate(),
            text: block.into(),
            note: None,
            variant: Variant::Table { info },
            layout: Layout::default(),
            children: Vec::new(),
        }
    }

    /// The structural metadata, if any.
    pub fn meta(&self) -> Option<&StructuralMeta> {
        self.variant.meta()
    }

    pub fn meta_mut(&mut self) -> Option<&mut StructuralMeta> {
        self.variant.meta_mut()
    }

    /// Whether this is the synthetic preface node.
    pub fn is_preface(&self) -> bool {
        matches!(
            self.meta(),
            Some(meta) if meta.kind == crate::mapdown::ast::ElementKind::Preface
        )
    }
}
