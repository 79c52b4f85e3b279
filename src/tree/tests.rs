use pretty_assertions::assert_eq;

use crate::ast::{
    ast::{Entry, Item},
    expressions::{BinaryOp, CompareOp, Condition, Expr, Operand},
    statements::{Block, Declaration, IfStmt, Stmt, WhileStmt},
    types::DataType,
};

use super::node::Node;

fn ident(name: &str) -> Operand {
    Operand::Identifier(name.to_string())
}

#[test]
fn test_push_returns_pushed_child() {
    let mut root = Node::new("assignment");
    root.push(Node::new("identifier")).push(Node::leaf("x"));

    assert_eq!(root.children.len(), 1);
    assert_eq!(root.get("identifier").unwrap().child(0).unwrap().label, "x");
}

#[test]
fn test_leaf_and_wrapper() {
    let wrapper = Node::wrap("literal", Node::leaf("1"));

    assert!(!wrapper.is_leaf());
    assert!(wrapper.child(0).unwrap().is_leaf());
    assert_eq!(wrapper.child(0).unwrap().terminal_text.as_deref(), Some("1"));
    assert!(wrapper.get("missing").is_none());
}

#[test]
fn test_lower_declaration_without_initializer() {
    let item = Item::Declaration(Declaration {
        data_type: DataType::Int,
        name: "x".to_string(),
        initializer: None,
    });

    let node = Node::from(&item);
    assert_eq!(node.label, "declaration");
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0], Node::wrap("data_type", Node::leaf("int")));
    assert_eq!(node.children[1], Node::wrap("identifier", Node::leaf("x")));
}

#[test]
fn test_lower_declaration_with_initializer() {
    let item = Item::Declaration(Declaration {
        data_type: DataType::Char,
        name: "c".to_string(),
        initializer: Some(Expr::literal("a")),
    });

    let node = Node::from(&item);
    assert_eq!(node.children.len(), 3);

    let assignment = &node.children[2];
    assert_eq!(assignment.label, "assignment");
    assert_eq!(
        assignment.children[1],
        Node::wrap("expression", Node::wrap("literal", Node::leaf("a")))
    );
}

#[test]
fn test_lower_binary_nests_right() {
    let expr = Expr::binary(
        BinaryOp::Add,
        ident("a"),
        Expr::binary(BinaryOp::Sub, ident("b"), Expr::identifier("c")),
    );

    let node = Node::from(&expr);
    assert_eq!(node.label, "add");
    assert_eq!(node.children[0], Node::wrap("identifier", Node::leaf("a")));
    assert_eq!(node.children[1].label, "sub");
    assert_eq!(node.children[1].children[1], Node::wrap("identifier", Node::leaf("c")));
}

#[test]
fn test_lower_unknown_tags() {
    let expr = Expr::binary(BinaryOp::Unknown("%".to_string()), ident("a"), Expr::literal("2"));
    assert_eq!(Node::from(&expr).label, "unknown");

    let condition = Condition::Compare {
        op: CompareOp::Unknown("<".to_string()),
        left: ident("a"),
        right: ident("b"),
    };
    assert_eq!(Node::from(&condition).label, "unknown");

    let declaration = Item::Declaration(Declaration {
        data_type: DataType::Unknown("float".to_string()),
        name: "f".to_string(),
        initializer: None,
    });
    assert_eq!(Node::from(&declaration).children[0].children[0].label, "unknown");
}

#[test]
fn test_lower_if_puts_condition_first() {
    let stmt = Stmt::If(IfStmt {
        condition: Condition::Compare {
            op: CompareOp::Equals,
            left: ident("a"),
            right: ident("b"),
        },
        body: Block::default(),
        else_body: Some(Box::new(Stmt::Compound(Block::default()))),
    });

    let node = Node::from(&stmt);
    let labels: Vec<&str> = node.children.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["condition", "compound", "else"]);
    assert_eq!(node.children[0].children[0].label, "equals");
}

#[test]
fn test_lower_while_keeps_condition() {
    let stmt = Stmt::While(WhileStmt {
        condition: Condition::Operand(ident("running")),
        body: Block {
            body: vec![Stmt::Empty],
        },
    });

    let node = Node::from(&stmt);
    assert_eq!(node.label, "while");
    assert_eq!(
        node.children[0],
        Node::wrap("condition", Node::wrap("identifier", Node::leaf("running")))
    );
    assert_eq!(node.children[1].children, vec![Node::new("empty")]);
}

#[test]
fn test_dump_indents_children() {
    let item = Item::Entry(Entry {
        body: Block {
            body: vec![Stmt::Declaration(Declaration {
                data_type: DataType::Bool,
                name: "ok".to_string(),
                initializer: None,
            })],
        },
    });

    let expected = "\
entry
  compound
    declaration
      data_type
        bool
      identifier
        ok
";
    assert_eq!(Node::from(&item).dump(), expected);
}

#[test]
fn test_dump_xml() {
    let node = Node::new("import").with(Node::leaf("std<io>"));
    assert_eq!(node.dump_xml(), "<import>std&lt;io&gt;</import>");
    assert_eq!(Node::new("compound").dump_xml(), "<compound/>");
    assert_eq!(Node::default().dump_xml(), "<node/>");
}
