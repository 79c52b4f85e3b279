use std::fmt::Display;

use thiserror::Error;
use tracing::warn;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::UnknownComparison { .. } => "UnknownComparison",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::UnexpectedTopLevel { .. } => "UnexpectedTopLevel",
            ErrorImpl::UnterminatedList { .. } => "UnterminatedList",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token, expected
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnknownOperator { operator } => ErrorTip::Suggestion(format!(
                "Unrecognized math operator `{}`, expected one of `+ - * /`",
                operator
            )),
            ErrorImpl::UnknownComparison { operator } => ErrorTip::Suggestion(format!(
                "Unrecognized comparison operator `{}`, only `==` is supported",
                operator
            )),
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::UnexpectedTopLevel { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a top-level item, expected an import, declaration, function or entry block",
                token
            )),
            ErrorImpl::UnterminatedList { expected } => ErrorTip::Suggestion(format!(
                "Reached end of input while looking for {}",
                expected
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: expected {expected}, found {token:?}")]
    UnexpectedToken { expected: TokenKind, token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unrecognized math operator {operator:?}")]
    UnknownOperator { operator: String },
    #[error("unrecognized comparison operator {operator:?}")]
    UnknownComparison { operator: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("unexpected token on top level: {token:?}")]
    UnexpectedTopLevel { token: String },
    #[error("unterminated list: expected {expected} before end of input")]
    UnterminatedList { expected: TokenKind },
}

/// Receiver for non-fatal parse diagnostics.
///
/// The parser never aborts on a reported error; it degrades the affected
/// subtree and keeps going. Callers inspect the sink afterwards to decide
/// whether the tree can be trusted.
pub trait DiagnosticSink {
    fn report(&mut self, error: Error);
}

impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: Error) {
        warn!(error = %error, "diagnostic reported");
        self.push(error);
    }
}
