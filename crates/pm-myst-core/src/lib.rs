//! pm-myst-core: Editor node schema and MyST AST conversion
//!
//! This crate provides:
//! - Editor document tree (ProseMirror-style JSON)
//! - Node specs: content expressions, groups and DOM rules per node type
//! - Per-node conversion to MyST and attribute extraction from MyST tokens
//! - Whole-document conversion in both directions
//!
//! # Example
//!
//! ```
//! use pm_myst_core::{EditorNode, doc_to_mdast, MdNode};
//!
//! let doc = EditorNode::doc(vec![EditorNode::bullet_list(vec![
//!     EditorNode::list_item(vec![EditorNode::paragraph(vec![EditorNode::text("a")])]),
//! ])]);
//!
//! let root = doc_to_mdast(&doc).unwrap();
//! assert!(matches!(&root.children[0], MdNode::List(list) if !list.ordered));
//! ```

pub mod attrs;
pub mod convert;
pub mod groups;
pub mod node;
pub mod schema;
pub mod spec;

pub use attrs::{AttributeSpec, EmptyAttrs, OrderedListAttrs};
pub use convert::{ConvertError, ConvertResult, doc_to_mdast, mdast_to_doc, node_to_mdast};
pub use groups::NodeGroups;
pub use node::EditorNode;
pub use pm_myst_mdast::{self as mdast, Node as MdNode, Root as MdRoot};
pub use schema::{MystNode, Props, to_dom};
pub use spec::{DomOutputSpec, NodeSpec, NodeType, ParseRule};
