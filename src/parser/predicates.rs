//! Lookahead predicates.
//!
//! Each predicate answers "does the upcoming token sequence start
//! production P?" without consuming input. They all go through
//! `Parser::lookahead`, which restores the cursor on every path.

use tracing::trace;

use crate::lexer::tokens::TokenKind;

use super::parser::Parser;

/// `type : name`, a variable declaration.
pub fn is_decl(parser: &mut Parser) -> bool {
    let result = parser.lookahead(|p| {
        p.match_token(TokenKind::TypeKeyword)
            && p.match_token(TokenKind::Confirm)
            && p.match_token(TokenKind::Identifier)
    });
    if result {
        trace!("is a decl");
    }
    result
}

/// `type name`, a function definition. Mutually exclusive with `is_decl`
/// since the second token differs.
pub fn is_func(parser: &mut Parser) -> bool {
    parser.lookahead(|p| p.match_token(TokenKind::TypeKeyword) && p.match_token(TokenKind::Identifier))
}

/// `name =`
pub fn is_assign(parser: &mut Parser) -> bool {
    let result = parser.lookahead(|p| {
        p.match_token(TokenKind::Identifier) && p.match_token(TokenKind::Assignment)
    });
    if result {
        trace!("is an assign");
    }
    result
}

/// `name (`
pub fn is_call(parser: &mut Parser) -> bool {
    let result = parser.lookahead(|p| {
        p.match_token(TokenKind::Identifier) && p.match_token(TokenKind::OpenParen)
    });
    if result {
        trace!("is a function call");
    }
    result
}

pub fn is_entry(parser: &mut Parser) -> bool {
    parser.lookahead(|p| p.match_token(TokenKind::Entry))
}
