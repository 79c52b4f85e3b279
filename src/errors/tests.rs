//! Unit tests for error handling.
//!
//! This module contains tests for error types, tips and the diagnostic sink.

use crate::errors::errors::{DiagnosticSink, Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.lang".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            token: "42".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.lang");
}

#[test]
fn test_unknown_operator_error() {
    let error = Error::new(
        ErrorImpl::UnknownOperator {
            operator: "%".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnknownOperator");
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnknownOperator {
            operator: "%".to_string()
        }
    );
}

#[test]
fn test_unknown_comparison_error() {
    let error = Error::new(
        ErrorImpl::UnknownComparison {
            operator: "<".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnknownComparison");
}

#[test]
fn test_unknown_type_error() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "float".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnknownType");
}

#[test]
fn test_unexpected_top_level_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedTopLevel {
            token: "}".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedTopLevel");
}

#[test]
fn test_unterminated_list_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedList {
            expected: TokenKind::CloseCurly,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnterminatedList");
    assert_eq!(
        error.get_tip().to_string(),
        "Reached end of input while looking for CloseCurly"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            token: "EOF".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected token: `EOF`, expected CloseCurly"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnknownOperator {
            operator: "%".to_string(),
        },
        at(7),
    );

    assert_eq!(
        error.to_string(),
        "unrecognized math operator \"%\" at test.lang:7"
    );
}

#[test]
fn test_vec_sink_collects_in_order() {
    let mut sink: Vec<Error> = Vec::new();
    sink.report(Error::new(
        ErrorImpl::UnknownOperator {
            operator: "%".to_string(),
        },
        at(1),
    ));
    sink.report(Error::new(
        ErrorImpl::UnknownType {
            type_: "float".to_string(),
        },
        at(2),
    ));

    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].get_error_name(), "UnknownOperator");
    assert_eq!(sink[1].get_position().0, 2);
}
