//! Integration tests for the front end.
//!
//! These tests go through the public pipeline: source text is tokenized,
//! parsed into the typed tree, and lowered into the generic labeled tree.

use std::rc::Rc;

use frontend::{
    ast::{
        ast::{Item, Program},
        expressions::Expr,
        statements::Stmt,
    },
    errors::errors::{DiagnosticSink, Error},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::{parse, parse_with_sink},
    tree::{lower::lower_program, node::Node},
};
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> (Program, Vec<Error>) {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    parse(tokens, Rc::new("test.lang".to_string()))
}

#[test]
fn test_declaration_from_token_stream() {
    // `int x;` as it would come from another scanner
    let tokens = vec![
        Token::synthetic(TokenKind::TypeKeyword, "int"),
        Token::synthetic(TokenKind::Confirm, ":"),
        Token::synthetic(TokenKind::Identifier, "x"),
        Token::synthetic(TokenKind::Semicolon, ";"),
        Token::synthetic(TokenKind::EOF, "EOF"),
    ];

    let (program, diagnostics) = parse(tokens, Rc::new("tokens".to_string()));
    assert!(diagnostics.is_empty());

    let roots = lower_program(&program);
    assert_eq!(roots.len(), 1);
    assert_eq!(
        roots[0],
        Node::new("declaration")
            .with(Node::wrap("data_type", Node::leaf("int")))
            .with(Node::wrap("identifier", Node::leaf("x")))
    );
}

#[test]
fn test_full_program() {
    let source = r#"
        import "std/io";

        int: counter = 0;

        int add(int: a, int: b) {
            return a + b;
        }

        entry {
            int: total = 1 + 2 * 3;
            while total == 7 {
                total = total - 1;
            }
            if (counter == 0) {
                print("zero");
            } else {
                add(counter, 2);
            }
            for (int: i = 0; i == 3; i = i + 1) {
                print(i);
            }
        }
    "#;

    let (program, diagnostics) = parse_source(source);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);

    let labels: Vec<String> = lower_program(&program).iter().map(|n| n.label.clone()).collect();
    assert_eq!(labels, vec!["import", "declaration", "function", "entry"]);

    let Item::Entry(entry) = &program.items[3] else {
        panic!("expected entry block");
    };
    let kinds: Vec<&str> = entry
        .body
        .iter()
        .map(|stmt| match stmt {
            Stmt::Declaration(_) => "declaration",
            Stmt::While(_) => "while",
            Stmt::If(_) => "if",
            Stmt::For(_) => "for",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["declaration", "while", "if", "for"]);
}

#[test]
fn test_call_is_not_an_expression_operand() {
    // `counter = add(1, 2);` is an assignment whose operand is `add`; the
    // parenthesised arguments are left for the statement dispatcher.
    let (program, diagnostics) = parse_source("entry { counter = add(1, 2); }");

    assert_eq!(program.len(), 1);
    assert!(!diagnostics.is_empty());
}

#[test]
fn test_tree_dump() {
    let (program, diagnostics) = parse_source("entry { x = a + b + c; }");
    assert!(diagnostics.is_empty());

    let expected = "\
entry
  compound
    assignment
      identifier
        x
      expression
        add
          identifier
            a
          add
            identifier
              b
            identifier
              c
";
    assert_eq!(lower_program(&program)[0].dump(), expected);
}

#[test]
fn test_diagnostics_are_collected_not_fatal() {
    let (program, diagnostics) = parse_source("int: a = 1 % 2; int: b = a < 3; char: c;");

    // Every item still comes back
    assert_eq!(program.len(), 3);

    let names: Vec<&str> = diagnostics.iter().map(|d| d.get_error_name()).collect();
    assert_eq!(names, vec!["UnknownOperator", "UnexpectedTopLevel", "UnexpectedTopLevel", "UnexpectedTopLevel"]);
}

#[test]
fn test_custom_sink() {
    struct Counter(usize);

    impl DiagnosticSink for Counter {
        fn report(&mut self, _error: Error) {
            self.0 += 1;
        }
    }

    let tokens = tokenize("} } int: x;".to_string(), None).unwrap();
    let mut counter = Counter(0);
    let program = parse_with_sink(tokens, Rc::new("shell".to_string()), &mut counter);

    assert_eq!(program.len(), 1);
    assert_eq!(counter.0, 2);
}

#[test]
fn test_error_positions_point_into_source() {
    let source = "int: x = 4 % 2;";
    let (_, diagnostics) = parse_source(source);

    assert_eq!(diagnostics.len(), 1);
    let offset = diagnostics[0].get_position().0 as usize;
    assert_eq!(&source[offset..offset + 1], "%");
}

#[test]
fn test_entry_is_only_a_top_level_item() {
    let (program, diagnostics) = parse_source(r#"import "x"; int main() { entry { } }"#);

    let labels: Vec<String> = lower_program(&program).iter().map(|n| n.label.clone()).collect();
    assert_eq!(labels, vec!["import", "function"]);

    // `entry` inside a body is not a statement; its block still parses
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_error_name(), "UnexpectedTokenDetailed");

    let Item::Function(main) = &program.items[1] else {
        panic!("expected function");
    };
    assert!(matches!(main.body.body[..], [Stmt::Unknown(_), Stmt::Compound(_)]));
}

#[test]
fn test_long_operator_chain() {
    let terms = 100_000;
    let source = format!("int: x = a{}", " + a".repeat(terms));

    let (program, diagnostics) = parse_source(&source);
    assert!(diagnostics.is_empty());

    let Item::Declaration(declaration) = &program.items[0] else {
        panic!("expected declaration");
    };
    let mut expr = declaration.initializer.as_ref().unwrap();
    let mut operands = 1;
    while let Expr::Binary { right, .. } = expr {
        operands += 1;
        expr = right.as_ref();
    }
    assert_eq!(operands, terms + 1);

    let roots = lower_program(&program);
    let mut node = &roots[0].children[2].children[1].children[0];
    let mut depth = 1;
    while node.label == "add" {
        depth += 1;
        node = &node.children[1];
    }
    assert_eq!(depth, terms + 1);
}

#[test]
fn test_deeply_nested_blocks() {
    let levels = 10_000;
    let source = format!("entry {{ {}{}}}", "{ ".repeat(levels), "} ".repeat(levels));

    let (program, diagnostics) = parse_source(&source);
    assert!(diagnostics.is_empty());
    assert_eq!(program.len(), 1);

    let roots = lower_program(&program);
    let mut node = &roots[0].children[0];
    let mut depth = 0;
    while let Some(inner) = node.child(0) {
        depth += 1;
        node = inner;
    }
    assert_eq!(depth, levels);
}
