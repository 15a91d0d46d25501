//! Editor document <-> MyST AST conversion
//!
//! Walks whole trees and applies each node type's [`MystNode`] conversion.
//! Export converts children first, then hands them to the parent's
//! `to_myst`. Import extracts attributes with `attrs_from_mdast_token`.

use pm_myst_mdast::{self as mdast, Node, Root};
use thiserror::Error;

use crate::node::EditorNode;
use crate::schema::{
    Blockquote, BulletList, HardBreak, HorizontalRule, ListItem, MystNode, OrderedList, Paragraph,
    Props,
};
use crate::spec::NodeType;

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Expected a `doc` node at the top of the document, found `{found}`")]
    NotADocument { found: &'static str },

    #[error("A `doc` node can only appear at the top of the document")]
    NestedDocument,

    #[error("Unrecognized node type: {node_type}")]
    UnsupportedNode { node_type: String },

    #[error("`{child}` is not allowed inside `{parent}`")]
    UnexpectedChild { parent: &'static str, child: String },
}

/// Convert result type
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Convert an editor document to a MyST root
pub fn doc_to_mdast(doc: &EditorNode) -> ConvertResult<Root> {
    match doc {
        EditorNode::Doc { content } => Ok(Root::new(export_children(content)?)),
        other => Err(ConvertError::NotADocument {
            found: other.node_type().name(),
        }),
    }
}

/// Convert a single editor node (and its subtree) to one MyST node
pub fn node_to_mdast(node: &EditorNode) -> ConvertResult<Node> {
    match node {
        EditorNode::Doc { .. } => Err(ConvertError::NestedDocument),
        EditorNode::Text { text } => Ok(Node::text(text.clone())),
        EditorNode::Paragraph { content } => export::<Paragraph>(Default::default(), content),
        EditorNode::Blockquote { content } => export::<Blockquote>(Default::default(), content),
        EditorNode::HorizontalRule => export::<HorizontalRule>(Default::default(), &[]),
        EditorNode::HardBreak => export::<HardBreak>(Default::default(), &[]),
        EditorNode::OrderedList { attrs, content } => export::<OrderedList>(*attrs, content),
        EditorNode::BulletList { content } => export::<BulletList>(Default::default(), content),
        EditorNode::ListItem { content } => export::<ListItem>(Default::default(), content),
    }
}

fn export<T: MystNode>(attrs: T::Attrs, content: &[EditorNode]) -> ConvertResult<Node> {
    Ok(T::to_myst(Props::new(attrs, export_children(content)?)))
}

fn export_children(content: &[EditorNode]) -> ConvertResult<Vec<Node>> {
    content.iter().map(node_to_mdast).collect()
}

/// Convert a MyST root to an editor document
pub fn mdast_to_doc(root: &Root) -> ConvertResult<EditorNode> {
    let content = import_blocks(&root.children, NodeType::Doc)?;
    Ok(EditorNode::Doc { content })
}

/// Import the children of a block container. Runs of phrasing content are
/// wrapped in paragraphs, which restores list items exported with a
/// flattened paragraph.
fn import_blocks(nodes: &[Node], parent: NodeType) -> ConvertResult<Vec<EditorNode>> {
    let mut result = Vec::new();
    let mut current_para: Vec<EditorNode> = Vec::new();

    for node in nodes {
        if node.is_phrasing() {
            if let Some(inline) = import_inline(node, nodes, NodeType::Paragraph)? {
                current_para.push(inline);
            }
            continue;
        }

        flush_paragraph(&mut current_para, &mut result);
        let block = match node {
            Node::Paragraph(p) => {
                let content = import_inline_children(&p.children)?;
                import::<Paragraph>(node, nodes, content)
            }
            Node::Blockquote(b) => {
                let content = import_blocks(&b.children, NodeType::Blockquote)?;
                import::<Blockquote>(node, nodes, content)
            }
            Node::ThematicBreak => import::<HorizontalRule>(node, nodes, Vec::new()),
            Node::List(list) => import_list(node, list, nodes)?,
            Node::ListItem(_) => {
                return Err(ConvertError::UnexpectedChild {
                    parent: parent.name(),
                    child: node.node_type().to_string(),
                });
            }
            other => {
                return Err(ConvertError::UnsupportedNode {
                    node_type: other.node_type().to_string(),
                });
            }
        };
        result.push(block);
    }

    flush_paragraph(&mut current_para, &mut result);
    Ok(result)
}

fn flush_paragraph(para: &mut Vec<EditorNode>, result: &mut Vec<EditorNode>) {
    if !para.is_empty() {
        result.push(Paragraph::create(Default::default(), std::mem::take(para)));
    }
}

fn import_list(token: &Node, list: &mdast::List, siblings: &[Node]) -> ConvertResult<EditorNode> {
    let parent = if list.ordered {
        NodeType::OrderedList
    } else {
        NodeType::BulletList
    };

    let mut items = Vec::with_capacity(list.children.len());
    for child in &list.children {
        let item = match child {
            Node::ListItem(item) => item,
            Node::Unknown(unknown) => {
                return Err(ConvertError::UnsupportedNode {
                    node_type: unknown.node_type.clone(),
                });
            }
            other => {
                return Err(ConvertError::UnexpectedChild {
                    parent: parent.name(),
                    child: other.node_type().to_string(),
                });
            }
        };
        let mut content = import_blocks(&item.children, NodeType::ListItem)?;
        // An empty item was exported from a single empty paragraph
        if content.is_empty() {
            content.push(Paragraph::create(Default::default(), Vec::new()));
        }
        items.push(import::<ListItem>(child, &list.children, content));
    }

    Ok(if list.ordered {
        import::<OrderedList>(token, siblings, items)
    } else {
        import::<BulletList>(token, siblings, items)
    })
}

fn import_inline_children(nodes: &[Node]) -> ConvertResult<Vec<EditorNode>> {
    let mut result = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(inline) = import_inline(node, nodes, NodeType::Paragraph)? {
            result.push(inline);
        }
    }
    Ok(result)
}

/// Import one phrasing node. Empty text is dropped.
fn import_inline(
    node: &Node,
    siblings: &[Node],
    parent: NodeType,
) -> ConvertResult<Option<EditorNode>> {
    match node {
        Node::Text(t) if t.value.is_empty() => Ok(None),
        Node::Text(t) => Ok(Some(EditorNode::text(t.value.clone()))),
        Node::Break => Ok(Some(import::<HardBreak>(node, siblings, Vec::new()))),
        other if other.is_phrasing() || matches!(other, Node::Unknown(_)) => {
            Err(ConvertError::UnsupportedNode {
                node_type: other.node_type().to_string(),
            })
        }
        other => Err(ConvertError::UnexpectedChild {
            parent: parent.name(),
            child: other.node_type().to_string(),
        }),
    }
}

fn import<T: MystNode>(token: &Node, siblings: &[Node], content: Vec<EditorNode>) -> EditorNode {
    T::create(T::attrs_from_mdast_token(token, siblings), content)
}

#[cfg(test)]
mod tests;
