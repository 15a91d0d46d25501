//! pm-myst-mdast: MyST / mdast node types for pm-myst
//!
//! This crate provides the external document tree the editor schema imports
//! from and exports to. Nodes serialize to MyST AST JSON with a `type` tag.
//!
//! ## Example
//!
//! ```rust
//! use pm_myst_mdast::{Node, Root};
//!
//! let doc = Root::new(vec![
//!     Node::paragraph(vec![Node::text("Hello")]),
//!     Node::thematic_break(),
//! ]);
//!
//! let json = serde_json::to_string(&doc).unwrap();
//! assert!(json.contains(r#""type":"thematicBreak""#));
//! ```

pub mod mdast;

pub use mdast::{
    Blockquote, Code, Emphasis, Heading, InlineCode, List, ListItem, Node, Paragraph, Root,
    Strong, Text,
};
