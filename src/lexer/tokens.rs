use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::TypeKeyword);
        map.insert("char", TokenKind::TypeKeyword);
        map.insert("bool", TokenKind::TypeKeyword);
        map.insert("byte", TokenKind::TypeKeyword);
        map.insert("true", TokenKind::Literal);
        map.insert("false", TokenKind::Literal);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("import", TokenKind::Import);
        map.insert("entry", TokenKind::Entry);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Literal,
    TypeKeyword,

    Confirm,    // :
    Assignment, // =
    MathOp,     // + - * / %
    CompareOp,  // == != < > <= >=

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,
    Semicolon,

    // Reserved
    If,
    Else,
    While,
    For,
    Return,
    Import,
    Entry,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Builds a token with a null span, for token streams that do not come
    /// from the lexer.
    pub fn synthetic(kind: TokenKind, value: &str) -> Self {
        Token {
            kind,
            value: String::from(value),
            span: Span::null(),
        }
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::Literal,
            TokenKind::TypeKeyword,
            TokenKind::MathOp,
            TokenKind::CompareOp,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
