//! Node groups and content-model expressions
//!
//! Groups name sets of node types that content expressions refer to. Some
//! variants are full content expressions rather than a single group name;
//! they are shared by several node specs.

/// Node groups referenced by content-model expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeGroups {
    Top,
    Block,
    Heading,
    BlockOrHeading,
    BlockOrEquation,
    BlockOrEquationOrHeading,
    Inline,
    Text,
    Cite,
    /// Figure bodies hold one or two of caption, image, iframe, table, code.
    /// A figure may therefore be empty until a cleanup pass removes it.
    InsideFigure,
}

impl NodeGroups {
    pub const ALL: [NodeGroups; 10] = [
        NodeGroups::Top,
        NodeGroups::Block,
        NodeGroups::Heading,
        NodeGroups::BlockOrHeading,
        NodeGroups::BlockOrEquation,
        NodeGroups::BlockOrEquationOrHeading,
        NodeGroups::Inline,
        NodeGroups::Text,
        NodeGroups::Cite,
        NodeGroups::InsideFigure,
    ];

    /// The string the schema engine sees
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeGroups::Top => "topblock",
            NodeGroups::Block => "block",
            NodeGroups::Heading => "heading",
            NodeGroups::BlockOrHeading => "(block | heading)+",
            NodeGroups::BlockOrEquation => "(block | equation)+",
            NodeGroups::BlockOrEquationOrHeading => "(block | heading | equation)+",
            NodeGroups::Inline => "inline",
            NodeGroups::Text => "text",
            NodeGroups::Cite => "cite",
            NodeGroups::InsideFigure => "(figcaption | image | iframe | table | code_block){1,2}",
        }
    }

    /// Whether this is a plain group name usable as a node's `group`
    pub fn is_group_name(self) -> bool {
        !self.as_str().contains(['(', ' ', '+', '*', '{'])
    }
}

impl std::fmt::Display for NodeGroups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of the equation node, referenced by comment documents
pub const EQUATION: &str = "equation";

/// Content of a full document
pub const DOC_CONTENT: &str = "(block | heading | topblock)+";

/// Content of a single-paragraph document
pub const DOC_PARAGRAPH_CONTENT: &str = "paragraph";

/// Content of a comment document. Browsers collapse an empty node, so at
/// least one child is required.
pub const DOC_COMMENT_CONTENT: &str = "(block | heading | equation)+";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_content_uses_group_names() {
        assert_eq!(
            DOC_CONTENT,
            format!(
                "({} | {} | {})+",
                NodeGroups::Block,
                NodeGroups::Heading,
                NodeGroups::Top
            )
        );
        assert_eq!(
            DOC_COMMENT_CONTENT,
            format!("({} | {} | {EQUATION})+", NodeGroups::Block, NodeGroups::Heading)
        );
    }

    #[test]
    fn test_group_names() {
        let names: Vec<_> = NodeGroups::ALL
            .iter()
            .filter(|g| g.is_group_name())
            .map(|g| g.as_str())
            .collect();
        assert_eq!(
            names,
            ["topblock", "block", "heading", "inline", "text", "cite"]
        );
    }

    #[test]
    fn test_combined_expressions_match_alternation() {
        assert_eq!(NodeGroups::BlockOrEquationOrHeading.as_str(), DOC_COMMENT_CONTENT);
        assert!(NodeGroups::InsideFigure.as_str().ends_with("{1,2}"));
    }
}
