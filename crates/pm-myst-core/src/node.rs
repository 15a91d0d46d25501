//! Editor document tree
//!
//! Mirrors the editor's JSON serialization: every node has a snake_case
//! `type`, attribute-carrying nodes have `attrs`, containers have `content`
//! and text nodes have `text`.

use serde::{Deserialize, Serialize};

use crate::attrs::OrderedListAttrs;
use crate::spec::NodeType;

/// A node of the editor document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorNode {
    Doc {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<EditorNode>,
    },
    Paragraph {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<EditorNode>,
    },
    Blockquote {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<EditorNode>,
    },
    HorizontalRule,
    Text {
        text: String,
    },
    HardBreak,
    OrderedList {
        #[serde(default)]
        attrs: OrderedListAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<EditorNode>,
    },
    BulletList {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<EditorNode>,
    },
    ListItem {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<EditorNode>,
    },
}

impl EditorNode {
    pub fn node_type(&self) -> NodeType {
        match self {
            EditorNode::Doc { .. } => NodeType::Doc,
            EditorNode::Paragraph { .. } => NodeType::Paragraph,
            EditorNode::Blockquote { .. } => NodeType::Blockquote,
            EditorNode::HorizontalRule => NodeType::HorizontalRule,
            EditorNode::Text { .. } => NodeType::Text,
            EditorNode::HardBreak => NodeType::HardBreak,
            EditorNode::OrderedList { .. } => NodeType::OrderedList,
            EditorNode::BulletList { .. } => NodeType::BulletList,
            EditorNode::ListItem { .. } => NodeType::ListItem,
        }
    }

    /// Child nodes, empty for leaves and text
    pub fn content(&self) -> &[EditorNode] {
        match self {
            EditorNode::Doc { content }
            | EditorNode::Paragraph { content }
            | EditorNode::Blockquote { content }
            | EditorNode::OrderedList { content, .. }
            | EditorNode::BulletList { content }
            | EditorNode::ListItem { content } => content,
            EditorNode::HorizontalRule | EditorNode::Text { .. } | EditorNode::HardBreak => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            EditorNode::Text { text } => text.clone(),
            other => other.content().iter().map(EditorNode::text_content).collect(),
        }
    }
}

// Convenience constructors
impl EditorNode {
    pub fn doc(content: Vec<EditorNode>) -> Self {
        EditorNode::Doc { content }
    }

    pub fn paragraph(content: Vec<EditorNode>) -> Self {
        EditorNode::Paragraph { content }
    }

    pub fn text(s: impl Into<String>) -> Self {
        EditorNode::Text { text: s.into() }
    }

    pub fn blockquote(content: Vec<EditorNode>) -> Self {
        EditorNode::Blockquote { content }
    }

    pub fn horizontal_rule() -> Self {
        EditorNode::HorizontalRule
    }

    pub fn hard_break() -> Self {
        EditorNode::HardBreak
    }

    pub fn ordered_list(order: Option<i64>, content: Vec<EditorNode>) -> Self {
        EditorNode::OrderedList {
            attrs: OrderedListAttrs { order },
            content,
        }
    }

    pub fn bullet_list(content: Vec<EditorNode>) -> Self {
        EditorNode::BulletList { content }
    }

    pub fn list_item(content: Vec<EditorNode>) -> Self {
        EditorNode::ListItem { content }
    }
}
