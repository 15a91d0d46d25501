//! Declarative node-type contracts
//!
//! A [`NodeSpec`] is what the schema engine consumes: attribute names,
//! content expression, group and DOM rules. The engine itself lives outside
//! this crate; these values are the contract handed to it.

use serde_json::{Map, Value};

use crate::attrs::AttributeSpec;
use crate::groups::{DOC_COMMENT_CONTENT, DOC_CONTENT, DOC_PARAGRAPH_CONTENT, NodeGroups};
use crate::schema::{
    Blockquote, BulletList, HardBreak, HorizontalRule, ListItem, MystNode, OrderedList, Paragraph,
};

/// Full declaration of a node type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    pub attrs: &'static [AttributeSpec],
    /// Content expression; `None` for leaf nodes
    pub content: Option<&'static str>,
    pub group: Option<NodeGroups>,
    pub inline: bool,
    pub defining: bool,
    pub selectable: bool,
    pub parse_dom: &'static [ParseRule],
}

impl NodeSpec {
    /// A spec with no attributes, content, group or DOM rules
    pub const EMPTY: NodeSpec = NodeSpec {
        attrs: &[],
        content: None,
        group: None,
        inline: false,
        defining: false,
        selectable: true,
        parse_dom: &[],
    };

    pub fn is_leaf(&self) -> bool {
        self.content.is_none()
    }
}

/// A DOM element the node is parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
    pub tag: &'static str,
}

/// Top node of a full document
pub const DOC: NodeSpec = NodeSpec {
    content: Some(DOC_CONTENT),
    ..NodeSpec::EMPTY
};

/// Top node of a document restricted to one paragraph
pub const DOC_PARAGRAPH: NodeSpec = NodeSpec {
    content: Some(DOC_PARAGRAPH_CONTENT),
    ..NodeSpec::EMPTY
};

/// Top node of a comment
pub const DOC_COMMENT: NodeSpec = NodeSpec {
    content: Some(DOC_COMMENT_CONTENT),
    ..NodeSpec::EMPTY
};

/// Text nodes only declare their group
pub const TEXT: NodeSpec = NodeSpec {
    group: Some(NodeGroups::Inline),
    ..NodeSpec::EMPTY
};

/// Rendered form of a node: `[tag, attrs?, 0?]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomOutputSpec {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    /// Whether the node's content is rendered inside the element
    pub content_hole: bool,
}

impl DomOutputSpec {
    pub fn element(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            content_hole: false,
        }
    }

    pub fn container(tag: &'static str) -> Self {
        Self {
            content_hole: true,
            ..Self::element(tag)
        }
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// The array form the schema engine accepts, e.g. `["ol", {"start": "3"}, 0]`
    pub fn to_json(&self) -> Value {
        let mut parts = vec![Value::from(self.tag)];
        if !self.attrs.is_empty() {
            let attrs: Map<String, Value> = self
                .attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), Value::from(v.as_str())))
                .collect();
            parts.push(Value::Object(attrs));
        }
        if self.content_hole {
            parts.push(Value::from(0));
        }
        Value::Array(parts)
    }
}

/// Every node type of the editor schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Doc,
    Paragraph,
    Blockquote,
    HorizontalRule,
    Text,
    HardBreak,
    OrderedList,
    BulletList,
    ListItem,
}

impl NodeType {
    pub const ALL: [NodeType; 9] = [
        NodeType::Doc,
        NodeType::Paragraph,
        NodeType::Blockquote,
        NodeType::HorizontalRule,
        NodeType::Text,
        NodeType::HardBreak,
        NodeType::OrderedList,
        NodeType::BulletList,
        NodeType::ListItem,
    ];

    /// The node name used in editor JSON and content expressions
    pub const fn name(self) -> &'static str {
        match self {
            NodeType::Doc => "doc",
            NodeType::Paragraph => "paragraph",
            NodeType::Blockquote => "blockquote",
            NodeType::HorizontalRule => "horizontal_rule",
            NodeType::Text => "text",
            NodeType::HardBreak => "hard_break",
            NodeType::OrderedList => "ordered_list",
            NodeType::BulletList => "bullet_list",
            NodeType::ListItem => "list_item",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// The node type's declaration
    pub fn spec(self) -> &'static NodeSpec {
        match self {
            NodeType::Doc => &DOC,
            NodeType::Text => &TEXT,
            NodeType::Paragraph => &Paragraph::SPEC,
            NodeType::Blockquote => &Blockquote::SPEC,
            NodeType::HorizontalRule => &HorizontalRule::SPEC,
            NodeType::HardBreak => &HardBreak::SPEC,
            NodeType::OrderedList => &OrderedList::SPEC,
            NodeType::BulletList => &BulletList::SPEC,
            NodeType::ListItem => &ListItem::SPEC,
        }
    }

    /// The node type a DOM element parses into
    pub fn from_dom_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.spec().parse_dom.iter().any(|rule| rule.tag.eq_ignore_ascii_case(tag)))
    }

    pub fn is_block(self) -> bool {
        self.spec().group == Some(NodeGroups::Block)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
