//! MyST / mdast (Markdown Abstract Syntax Tree) types
//!
//! A subset of the MyST node taxonomy: the flow and phrasing nodes the editor
//! schema exchanges, plus a handful it has no counterpart for. Any other
//! node type is kept as [`Unknown`] with its fields untouched.
//! Reference: https://mystmd.org/spec and https://github.com/syntax-tree/mdast

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root node of a MyST document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A MyST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    // Flow content
    Paragraph(Paragraph),
    Blockquote(Blockquote),
    ThematicBreak,
    List(List),
    ListItem(ListItem),
    Heading(Heading),
    Code(Code),

    // Phrasing content
    Text(Text),
    Break,
    Emphasis(Emphasis),
    Strong(Strong),
    InlineCode(InlineCode),

    // Anything else (`link`, `math`, `mystDirective`, ...)
    #[serde(untagged)]
    Unknown(Unknown),
}

/// Paragraph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Blockquote node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blockquote {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// List node (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<bool>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// List item node
///
/// Children are flow content, or phrasing content directly when the item
/// holds a single paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<bool>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Heading node (# to ######)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Code block node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub value: String,
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Emphasis node (*text*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Strong node (**text**)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Inline code node (`code`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
}

/// A node of a type not modeled above
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawUnknown")]
pub struct Unknown {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawUnknown {
    #[serde(rename = "type")]
    node_type: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Type tags with a dedicated variant; a malformed node of one of these
/// types must not fall back to [`Unknown`]
const KNOWN_TYPES: &[&str] = &[
    "paragraph",
    "blockquote",
    "thematicBreak",
    "list",
    "listItem",
    "heading",
    "code",
    "text",
    "break",
    "emphasis",
    "strong",
    "inlineCode",
];

impl TryFrom<RawUnknown> for Unknown {
    type Error = String;

    fn try_from(raw: RawUnknown) -> Result<Self, Self::Error> {
        if KNOWN_TYPES.contains(&raw.node_type.as_str()) {
            return Err(format!("invalid `{}` node", raw.node_type));
        }
        Ok(Unknown {
            node_type: raw.node_type,
            fields: raw.fields,
        })
    }
}

impl Node {
    /// The `type` tag this node carries in MyST JSON
    pub fn node_type(&self) -> &str {
        match self {
            Node::Paragraph(_) => "paragraph",
            Node::Blockquote(_) => "blockquote",
            Node::ThematicBreak => "thematicBreak",
            Node::List(_) => "list",
            Node::ListItem(_) => "listItem",
            Node::Heading(_) => "heading",
            Node::Code(_) => "code",
            Node::Text(_) => "text",
            Node::Break => "break",
            Node::Emphasis(_) => "emphasis",
            Node::Strong(_) => "strong",
            Node::InlineCode(_) => "inlineCode",
            Node::Unknown(unknown) => &unknown.node_type,
        }
    }

    /// Whether this node is phrasing (inline) content
    pub fn is_phrasing(&self) -> bool {
        matches!(
            self,
            Node::Text(_) | Node::Break | Node::Emphasis(_) | Node::Strong(_) | Node::InlineCode(_)
        )
    }

    /// Child nodes, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(Paragraph { children })
            | Node::Blockquote(Blockquote { children })
            | Node::List(List { children, .. })
            | Node::ListItem(ListItem { children, .. })
            | Node::Heading(Heading { children, .. })
            | Node::Emphasis(Emphasis { children })
            | Node::Strong(Strong { children }) => children,
            Node::ThematicBreak
            | Node::Code(_)
            | Node::Text(_)
            | Node::Break
            | Node::InlineCode(_)
            | Node::Unknown(_) => &[],
        }
    }
}

// Convenience constructors
impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(Text { value: s.into() })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { children })
    }

    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::Blockquote(Blockquote { children })
    }

    pub fn thematic_break() -> Self {
        Node::ThematicBreak
    }

    pub fn line_break() -> Self {
        Node::Break
    }

    pub fn list(ordered: bool, start: Option<i64>, children: Vec<Node>) -> Self {
        Node::List(List {
            ordered,
            start,
            spread: None,
            children,
        })
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem(ListItem {
            spread: None,
            children,
        })
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { depth, children })
    }

    pub fn code(lang: Option<String>, value: impl Into<String>) -> Self {
        Node::Code(Code {
            lang,
            value: value.into(),
        })
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis(Emphasis { children })
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong(Strong { children })
    }

    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode(InlineCode {
            value: value.into(),
        })
    }
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}
