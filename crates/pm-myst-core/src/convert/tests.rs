use super::*;
use crate::attrs::OrderedListAttrs;

fn p(text: &str) -> EditorNode {
    EditorNode::paragraph(vec![EditorNode::text(text)])
}

fn item(text: &str) -> EditorNode {
    EditorNode::list_item(vec![p(text)])
}

fn md_p(text: &str) -> Node {
    Node::paragraph(vec![Node::text(text)])
}

#[test]
fn test_bullet_list_scenario() {
    let doc = EditorNode::doc(vec![EditorNode::bullet_list(vec![item("a"), item("b")])]);
    let root = doc_to_mdast(&doc).unwrap();

    assert_eq!(
        root,
        Root::new(vec![Node::list(
            false,
            None,
            vec![
                Node::list_item(vec![Node::text("a")]),
                Node::list_item(vec![Node::text("b")]),
            ],
        )])
    );

    let json = serde_json::to_value(&root.children[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "list",
            "ordered": false,
            "children": [
                { "type": "listItem", "children": [{ "type": "text", "value": "a" }] },
                { "type": "listItem", "children": [{ "type": "text", "value": "b" }] }
            ]
        })
    );
}

#[test]
fn test_simple_blocks_preserve_children_order() {
    let doc = EditorNode::doc(vec![
        EditorNode::paragraph(vec![
            EditorNode::text("one"),
            EditorNode::hard_break(),
            EditorNode::text("two"),
        ]),
        EditorNode::horizontal_rule(),
        EditorNode::blockquote(vec![p("q1"), p("q2")]),
    ]);

    let root = doc_to_mdast(&doc).unwrap();
    assert_eq!(
        root.children,
        vec![
            Node::paragraph(vec![Node::text("one"), Node::Break, Node::text("two")]),
            Node::ThematicBreak,
            Node::blockquote(vec![md_p("q1"), md_p("q2")]),
        ]
    );
}

#[test]
fn test_every_node_exports_exactly_one_node() {
    let doc = EditorNode::doc(vec![
        p("a"),
        EditorNode::horizontal_rule(),
        EditorNode::ordered_list(Some(2), vec![item("x"), item("y"), item("z")]),
        EditorNode::blockquote(vec![p("b")]),
    ]);
    let root = doc_to_mdast(&doc).unwrap();
    assert_eq!(root.children.len(), doc.content().len());

    let Node::List(list) = &root.children[2] else {
        panic!("Expected List node");
    };
    assert_eq!(list.children.len(), 3);
}

#[test]
fn test_ordered_list_start_export() {
    let doc = EditorNode::doc(vec![EditorNode::ordered_list(Some(4), vec![item("x")])]);
    let root = doc_to_mdast(&doc).unwrap();
    let Node::List(list) = &root.children[0] else {
        panic!("Expected List node");
    };
    assert!(list.ordered);
    assert_eq!(list.start, Some(4));
}

#[test]
fn test_ordered_list_without_order_has_no_start() {
    for order in [None, Some(0)] {
        let doc = EditorNode::doc(vec![EditorNode::ordered_list(order, vec![item("x")])]);
        let root = doc_to_mdast(&doc).unwrap();
        let Node::List(list) = &root.children[0] else {
            panic!("Expected List node");
        };
        assert!(list.ordered);
        assert_eq!(list.start, None);

        let json = serde_json::to_value(&root.children[0]).unwrap();
        assert!(json.get("start").is_none());
    }
}

#[test]
fn test_list_item_with_several_blocks_is_not_flattened() {
    let doc = EditorNode::doc(vec![EditorNode::bullet_list(vec![EditorNode::list_item(
        vec![p("X"), EditorNode::blockquote(vec![p("Y")])],
    )])]);
    let root = doc_to_mdast(&doc).unwrap();

    assert_eq!(
        root.children[0],
        Node::list(
            false,
            None,
            vec![Node::list_item(vec![
                md_p("X"),
                Node::blockquote(vec![md_p("Y")]),
            ])],
        )
    );
}

#[test]
fn test_nested_list_export() {
    let doc = EditorNode::doc(vec![EditorNode::bullet_list(vec![EditorNode::list_item(
        vec![
            p("parent"),
            EditorNode::ordered_list(Some(1), vec![item("child")]),
        ],
    )])]);
    let root = doc_to_mdast(&doc).unwrap();

    assert_eq!(
        root.children[0],
        Node::list(
            false,
            None,
            vec![Node::list_item(vec![
                md_p("parent"),
                Node::list(true, Some(1), vec![Node::list_item(vec![Node::text("child")])]),
            ])],
        )
    );
}

#[test]
fn test_export_requires_doc_at_top() {
    let err = doc_to_mdast(&p("a")).unwrap_err();
    assert_eq!(err, ConvertError::NotADocument { found: "paragraph" });

    let nested = EditorNode::doc(vec![EditorNode::blockquote(vec![EditorNode::doc(vec![])])]);
    assert_eq!(doc_to_mdast(&nested).unwrap_err(), ConvertError::NestedDocument);
}

#[test]
fn test_import_paragraphs_and_breaks() {
    let root = Root::new(vec![
        Node::paragraph(vec![Node::text("a"), Node::Break, Node::text("b")]),
        Node::ThematicBreak,
        Node::blockquote(vec![md_p("q")]),
    ]);
    let doc = mdast_to_doc(&root).unwrap();

    assert_eq!(
        doc,
        EditorNode::doc(vec![
            EditorNode::paragraph(vec![
                EditorNode::text("a"),
                EditorNode::hard_break(),
                EditorNode::text("b"),
            ]),
            EditorNode::horizontal_rule(),
            EditorNode::blockquote(vec![p("q")]),
        ])
    );
}

#[test]
fn test_import_wraps_flattened_list_items() {
    let root = Root::new(vec![Node::list(
        false,
        None,
        vec![
            Node::list_item(vec![Node::text("a")]),
            Node::list_item(vec![Node::text("b"), Node::Break, Node::text("c")]),
        ],
    )]);
    let doc = mdast_to_doc(&root).unwrap();

    assert_eq!(
        doc,
        EditorNode::doc(vec![EditorNode::bullet_list(vec![
            item("a"),
            EditorNode::list_item(vec![EditorNode::paragraph(vec![
                EditorNode::text("b"),
                EditorNode::hard_break(),
                EditorNode::text("c"),
            ])]),
        ])])
    );
}

#[test]
fn test_empty_list_item_round_trip() {
    let doc = EditorNode::doc(vec![EditorNode::bullet_list(vec![
        item("a"),
        EditorNode::list_item(vec![EditorNode::paragraph(vec![])]),
    ])]);

    let root = doc_to_mdast(&doc).unwrap();
    assert_eq!(
        root.children[0],
        Node::list(
            false,
            None,
            vec![
                Node::list_item(vec![Node::text("a")]),
                Node::list_item(vec![])
            ]
        )
    );
    assert_eq!(mdast_to_doc(&root).unwrap(), doc);
}

#[test]
fn test_import_wraps_inline_runs_between_blocks() {
    let root = Root::new(vec![Node::list(
        false,
        None,
        vec![Node::list_item(vec![
            Node::text("lead"),
            Node::blockquote(vec![md_p("q")]),
            Node::text("tail"),
        ])],
    )]);
    let doc = mdast_to_doc(&root).unwrap();

    assert_eq!(
        doc,
        EditorNode::doc(vec![EditorNode::bullet_list(vec![EditorNode::list_item(
            vec![p("lead"), EditorNode::blockquote(vec![p("q")]), p("tail")]
        )])])
    );
}

#[test]
fn test_import_ordered_list_start() {
    let root = Root::new(vec![Node::list(
        true,
        Some(5),
        vec![Node::list_item(vec![Node::text("five")])],
    )]);
    let doc = mdast_to_doc(&root).unwrap();
    let EditorNode::OrderedList { attrs, .. } = &doc.content()[0] else {
        panic!("Expected ordered_list node");
    };
    assert_eq!(*attrs, OrderedListAttrs::new(5));
}

#[test]
fn test_import_ordered_list_defaults_order_to_one() {
    let root = Root::new(vec![Node::list(true, None, vec![])]);
    let doc = mdast_to_doc(&root).unwrap();
    assert_eq!(doc.content()[0], EditorNode::ordered_list(Some(1), vec![]));
}

#[test]
fn test_round_trip_keeps_explicit_start() {
    let root = Root::new(vec![Node::list(
        true,
        Some(5),
        vec![Node::list_item(vec![Node::text("x")])],
    )]);
    let exported = doc_to_mdast(&mdast_to_doc(&root).unwrap()).unwrap();
    assert_eq!(exported, root);
}

#[test]
fn test_negative_start_survives_round_trip() {
    let root: Root = serde_json::from_str(
        r#"{ "type": "root", "children": [
            { "type": "list", "ordered": true, "start": -1, "children": [
                { "type": "listItem", "children": [{ "type": "text", "value": "x" }] }
            ]}
        ]}"#,
    )
    .unwrap();
    let doc = mdast_to_doc(&root).unwrap();
    assert_eq!(
        doc.content()[0],
        EditorNode::ordered_list(Some(-1), vec![item("x")])
    );
    assert_eq!(doc_to_mdast(&doc).unwrap(), root);
}

#[test]
fn test_round_trip_turns_missing_start_into_one() {
    let root = Root::new(vec![Node::list(
        true,
        None,
        vec![Node::list_item(vec![Node::text("x")])],
    )]);
    let exported = doc_to_mdast(&mdast_to_doc(&root).unwrap()).unwrap();

    let Node::List(list) = &exported.children[0] else {
        panic!("Expected List node");
    };
    assert_eq!(list.start, Some(1));
    assert_ne!(exported, root);
}

#[test]
fn test_round_trip_editor_document() {
    let doc = EditorNode::doc(vec![
        p("intro"),
        EditorNode::bullet_list(vec![
            item("a"),
            EditorNode::list_item(vec![p("b"), EditorNode::blockquote(vec![p("c")])]),
        ]),
        EditorNode::ordered_list(Some(3), vec![item("three")]),
        EditorNode::horizontal_rule(),
    ]);
    let back = mdast_to_doc(&doc_to_mdast(&doc).unwrap()).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_import_drops_empty_text() {
    let root = Root::new(vec![Node::paragraph(vec![
        Node::text(""),
        Node::text("x"),
    ])]);
    assert_eq!(mdast_to_doc(&root).unwrap(), EditorNode::doc(vec![p("x")]));
}

#[test]
fn test_import_unsupported_nodes() {
    let root = Root::new(vec![Node::heading(1, vec![Node::text("Title")])]);
    assert_eq!(
        mdast_to_doc(&root).unwrap_err(),
        ConvertError::UnsupportedNode {
            node_type: "heading".into()
        }
    );

    let root = Root::new(vec![Node::paragraph(vec![Node::emphasis(vec![
        Node::text("x"),
    ])])]);
    assert_eq!(
        mdast_to_doc(&root).unwrap_err(),
        ConvertError::UnsupportedNode {
            node_type: "emphasis".into()
        }
    );

    let root = Root::new(vec![Node::list(
        false,
        None,
        vec![Node::list_item(vec![Node::inline_code("x")])],
    )]);
    assert_eq!(
        mdast_to_doc(&root).unwrap_err(),
        ConvertError::UnsupportedNode {
            node_type: "inlineCode".into()
        }
    );
}

#[test]
fn test_import_reports_unmodeled_myst_types() {
    let root: Root = serde_json::from_str(
        r#"{ "type": "root", "children": [
            { "type": "paragraph", "children": [
                { "type": "text", "value": "see " },
                { "type": "link", "url": "https://mystmd.org", "children": [
                    { "type": "text", "value": "MyST" }
                ]}
            ]}
        ]}"#,
    )
    .unwrap();
    assert_eq!(
        mdast_to_doc(&root).unwrap_err(),
        ConvertError::UnsupportedNode {
            node_type: "link".into()
        }
    );

    let root: Root = serde_json::from_str(
        r#"{ "type": "root", "children": [{ "type": "math", "value": "x^2" }] }"#,
    )
    .unwrap();
    assert_eq!(
        mdast_to_doc(&root).unwrap_err().to_string(),
        "Unrecognized node type: math"
    );

    let root: Root = serde_json::from_str(
        r#"{ "type": "root", "children": [
            { "type": "list", "ordered": false, "children": [{ "type": "mystDirective" }] }
        ]}"#,
    )
    .unwrap();
    assert_eq!(
        mdast_to_doc(&root).unwrap_err(),
        ConvertError::UnsupportedNode {
            node_type: "mystDirective".into()
        }
    );
}

#[test]
fn test_import_rejects_misplaced_nodes() {
    let root = Root::new(vec![Node::list_item(vec![Node::text("x")])]);
    assert_eq!(
        mdast_to_doc(&root).unwrap_err(),
        ConvertError::UnexpectedChild {
            parent: "doc",
            child: "listItem".into()
        }
    );

    let root = Root::new(vec![Node::list(true, None, vec![md_p("x")])]);
    assert_eq!(
        mdast_to_doc(&root).unwrap_err(),
        ConvertError::UnexpectedChild {
            parent: "ordered_list",
            child: "paragraph".into()
        }
    );

    let root = Root::new(vec![Node::paragraph(vec![Node::ThematicBreak])]);
    assert_eq!(
        mdast_to_doc(&root).unwrap_err(),
        ConvertError::UnexpectedChild {
            parent: "paragraph",
            child: "thematicBreak".into()
        }
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConvertError::UnsupportedNode {
            node_type: "heading".into()
        }
        .to_string(),
        "Unrecognized node type: heading"
    );
    assert_eq!(
        ConvertError::UnexpectedChild {
            parent: "doc",
            child: "listItem".into()
        }
        .to_string(),
        "`listItem` is not allowed inside `doc`"
    );
}
