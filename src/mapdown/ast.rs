//! Data model for the node forest
//!
//! A document is a forest of nodes. Nodes carry their text, an optional
//! verbatim note, structural metadata describing how they appeared in the
//! text (heading level, list marker, indentation), and cosmetic layout data
//! owned by the UI layer which the converter passes through unchanged.

pub mod forest;
pub mod meta;
pub mod node;

pub use forest::Forest;
pub use meta::{is_numeric_marker, Checkbox, ElementKind, StructuralMeta};
pub use node::{Layout, Node, NodeId, TableInfo, Variant};
