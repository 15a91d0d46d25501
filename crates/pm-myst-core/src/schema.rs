//! Node definitions of the editor schema
//!
//! Each node type is a marker type implementing [`MystNode`], which holds its
//! whole contract in one place: the declarative [`NodeSpec`], the DOM output,
//! attribute extraction from a MyST token and export back to MyST.

use pm_myst_mdast::{self as mdast, Node};

use crate::attrs::{AttributeSpec, EmptyAttrs, OrderedListAttrs};
use crate::groups::NodeGroups;
use crate::node::EditorNode;
use crate::spec::{DomOutputSpec, NodeSpec, NodeType, ParseRule};

/// Input to [`MystNode::to_myst`]: the node's attributes and its children,
/// already converted to MyST
#[derive(Debug, Clone, PartialEq)]
pub struct Props<A> {
    pub attrs: A,
    pub children: Vec<Node>,
}

impl<A> Props<A> {
    pub fn new(attrs: A, children: Vec<Node>) -> Self {
        Self { attrs, children }
    }
}

impl<A: Default> Props<A> {
    pub fn from_children(children: Vec<Node>) -> Self {
        Self::new(A::default(), children)
    }
}

/// A node type that converts to and from MyST
pub trait MystNode {
    type Attrs: Clone + Default;

    const NODE_TYPE: NodeType;
    const SPEC: NodeSpec;

    /// How the node renders to the DOM
    fn to_dom(attrs: &Self::Attrs) -> DomOutputSpec;

    /// Attributes for a node created from `token`, one of `siblings`
    fn attrs_from_mdast_token(token: &Node, siblings: &[Node]) -> Self::Attrs;

    /// Exactly one MyST node for this editor node
    fn to_myst(props: Props<Self::Attrs>) -> Node;

    /// Build the editor node. Leaves ignore `content`.
    fn create(attrs: Self::Attrs, content: Vec<EditorNode>) -> EditorNode;
}

pub struct Paragraph;

impl MystNode for Paragraph {
    type Attrs = EmptyAttrs;

    const NODE_TYPE: NodeType = NodeType::Paragraph;
    const SPEC: NodeSpec = NodeSpec {
        content: Some("inline*"),
        group: Some(NodeGroups::Block),
        parse_dom: &[ParseRule { tag: "p" }],
        ..NodeSpec::EMPTY
    };

    fn to_dom(_: &EmptyAttrs) -> DomOutputSpec {
        DomOutputSpec::container("p")
    }

    fn attrs_from_mdast_token(_: &Node, _: &[Node]) -> EmptyAttrs {
        EmptyAttrs {}
    }

    fn to_myst(props: Props<EmptyAttrs>) -> Node {
        Node::paragraph(props.children)
    }

    fn create(_: EmptyAttrs, content: Vec<EditorNode>) -> EditorNode {
        EditorNode::Paragraph { content }
    }
}

pub struct Blockquote;

impl MystNode for Blockquote {
    type Attrs = EmptyAttrs;

    const NODE_TYPE: NodeType = NodeType::Blockquote;
    const SPEC: NodeSpec = NodeSpec {
        content: Some("block+"),
        group: Some(NodeGroups::Block),
        defining: true,
        parse_dom: &[ParseRule { tag: "blockquote" }],
        ..NodeSpec::EMPTY
    };

    fn to_dom(_: &EmptyAttrs) -> DomOutputSpec {
        DomOutputSpec::container("blockquote")
    }

    fn attrs_from_mdast_token(_: &Node, _: &[Node]) -> EmptyAttrs {
        EmptyAttrs {}
    }

    fn to_myst(props: Props<EmptyAttrs>) -> Node {
        Node::blockquote(props.children)
    }

    fn create(_: EmptyAttrs, content: Vec<EditorNode>) -> EditorNode {
        EditorNode::Blockquote { content }
    }
}

/// Horizontal rule, exported as a thematic break
pub struct HorizontalRule;

impl MystNode for HorizontalRule {
    type Attrs = EmptyAttrs;

    const NODE_TYPE: NodeType = NodeType::HorizontalRule;
    const SPEC: NodeSpec = NodeSpec {
        group: Some(NodeGroups::Block),
        parse_dom: &[ParseRule { tag: "hr" }],
        ..NodeSpec::EMPTY
    };

    fn to_dom(_: &EmptyAttrs) -> DomOutputSpec {
        DomOutputSpec::element("hr").with_attr("class", "break")
    }

    fn attrs_from_mdast_token(_: &Node, _: &[Node]) -> EmptyAttrs {
        EmptyAttrs {}
    }

    fn to_myst(_: Props<EmptyAttrs>) -> Node {
        Node::thematic_break()
    }

    fn create(_: EmptyAttrs, _: Vec<EditorNode>) -> EditorNode {
        EditorNode::HorizontalRule
    }
}

pub struct HardBreak;

impl MystNode for HardBreak {
    type Attrs = EmptyAttrs;

    const NODE_TYPE: NodeType = NodeType::HardBreak;
    const SPEC: NodeSpec = NodeSpec {
        inline: true,
        group: Some(NodeGroups::Inline),
        selectable: false,
        parse_dom: &[ParseRule { tag: "br" }],
        ..NodeSpec::EMPTY
    };

    fn to_dom(_: &EmptyAttrs) -> DomOutputSpec {
        DomOutputSpec::element("br")
    }

    fn attrs_from_mdast_token(_: &Node, _: &[Node]) -> EmptyAttrs {
        EmptyAttrs {}
    }

    fn to_myst(_: Props<EmptyAttrs>) -> Node {
        Node::line_break()
    }

    fn create(_: EmptyAttrs, _: Vec<EditorNode>) -> EditorNode {
        EditorNode::HardBreak
    }
}

/// Content of a list item: a leading paragraph, then any blocks
const LIST_ITEM_CONTENT: &str = "paragraph block*";

pub struct OrderedList;

impl OrderedList {
    /// `order` for an `<ol>` element with the given `start` attribute
    pub fn attrs_from_dom(start: Option<&str>) -> OrderedListAttrs {
        let order = start.and_then(|s| s.trim().parse().ok()).unwrap_or(1);
        OrderedListAttrs::new(order)
    }
}

impl MystNode for OrderedList {
    type Attrs = OrderedListAttrs;

    const NODE_TYPE: NodeType = NodeType::OrderedList;
    const SPEC: NodeSpec = NodeSpec {
        attrs: &[AttributeSpec {
            name: "order",
            default: Some(1),
        }],
        content: Some("list_item+"),
        group: Some(NodeGroups::Block),
        parse_dom: &[ParseRule { tag: "ol" }],
        ..NodeSpec::EMPTY
    };

    fn to_dom(attrs: &OrderedListAttrs) -> DomOutputSpec {
        match attrs.order {
            None | Some(1) => DomOutputSpec::container("ol"),
            Some(order) => DomOutputSpec::container("ol").with_attr("start", order.to_string()),
        }
    }

    /// A missing or zero `start` becomes 1, so import then export cannot
    /// tell "no start" from "start = 1".
    fn attrs_from_mdast_token(token: &Node, _: &[Node]) -> OrderedListAttrs {
        let start = match token {
            Node::List(mdast::List { start, .. }) => start.filter(|&s| s != 0),
            _ => None,
        };
        OrderedListAttrs::new(start.unwrap_or(1))
    }

    fn to_myst(props: Props<OrderedListAttrs>) -> Node {
        Node::list(true, props.attrs.start(), props.children)
    }

    fn create(attrs: OrderedListAttrs, content: Vec<EditorNode>) -> EditorNode {
        EditorNode::OrderedList { attrs, content }
    }
}

pub struct BulletList;

impl MystNode for BulletList {
    type Attrs = EmptyAttrs;

    const NODE_TYPE: NodeType = NodeType::BulletList;
    const SPEC: NodeSpec = NodeSpec {
        content: Some("list_item+"),
        group: Some(NodeGroups::Block),
        parse_dom: &[ParseRule { tag: "ul" }],
        ..NodeSpec::EMPTY
    };

    fn to_dom(_: &EmptyAttrs) -> DomOutputSpec {
        DomOutputSpec::container("ul")
    }

    fn attrs_from_mdast_token(_: &Node, _: &[Node]) -> EmptyAttrs {
        EmptyAttrs {}
    }

    fn to_myst(props: Props<EmptyAttrs>) -> Node {
        Node::list(false, None, props.children)
    }

    fn create(_: EmptyAttrs, content: Vec<EditorNode>) -> EditorNode {
        EditorNode::BulletList { content }
    }
}

pub struct ListItem;

impl MystNode for ListItem {
    type Attrs = EmptyAttrs;

    const NODE_TYPE: NodeType = NodeType::ListItem;
    const SPEC: NodeSpec = NodeSpec {
        content: Some(LIST_ITEM_CONTENT),
        defining: true,
        parse_dom: &[ParseRule { tag: "li" }],
        ..NodeSpec::EMPTY
    };

    fn to_dom(_: &EmptyAttrs) -> DomOutputSpec {
        DomOutputSpec::container("li")
    }

    fn attrs_from_mdast_token(_: &Node, _: &[Node]) -> EmptyAttrs {
        EmptyAttrs {}
    }

    /// An item holding a single paragraph exports that paragraph's phrasing
    /// content directly.
    fn to_myst(props: Props<EmptyAttrs>) -> Node {
        let children = match <[Node; 1]>::try_from(props.children) {
            Ok([Node::Paragraph(p)]) => p.children,
            Ok([other]) => vec![other],
            Err(children) => children,
        };
        Node::list_item(children)
    }

    fn create(_: EmptyAttrs, content: Vec<EditorNode>) -> EditorNode {
        EditorNode::ListItem { content }
    }
}

/// DOM output for any editor node. Text and the document have none.
pub fn to_dom(node: &EditorNode) -> Option<DomOutputSpec> {
    let dom = match node {
        EditorNode::Doc { .. } | EditorNode::Text { .. } => return None,
        EditorNode::Paragraph { .. } => Paragraph::to_dom(&EmptyAttrs {}),
        EditorNode::Blockquote { .. } => Blockquote::to_dom(&EmptyAttrs {}),
        EditorNode::HorizontalRule => HorizontalRule::to_dom(&EmptyAttrs {}),
        EditorNode::HardBreak => HardBreak::to_dom(&EmptyAttrs {}),
        EditorNode::OrderedList { attrs, .. } => OrderedList::to_dom(attrs),
        EditorNode::BulletList { .. } => BulletList::to_dom(&EmptyAttrs {}),
        EditorNode::ListItem { .. } => ListItem::to_dom(&EmptyAttrs {}),
    };
    Some(dom)
}
