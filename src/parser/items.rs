//! Top-level items: functions, imports and the entry block.

use tracing::debug;

use crate::{
    ast::{
        ast::{Entry, Function, Import},
        statements::Declaration,
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    parser::Parser,
    stmt::{parse_block_stmt, parse_declaration},
    types::parse_data_type,
};

/// `( (declaration ,?)* )`
///
/// Parameters are full declarations, so `int: a = 1` is accepted as a
/// parameter and kept as written.
pub fn parse_params(parser: &mut Parser) -> Vec<Declaration> {
    let mut params = vec![];

    parser.expect(TokenKind::OpenParen);

    while !parser.match_token(TokenKind::CloseParen) {
        if parser.at_eof() {
            parser.report(ErrorImpl::UnterminatedList {
                expected: TokenKind::CloseParen,
            });
            break;
        }

        // The body has started, so the closing paren is missing
        if parser.current_token_kind() == TokenKind::OpenCurly {
            let token = parser.peek().value.clone();
            parser.report(ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseParen,
                token,
            });
            break;
        }

        params.push(parse_declaration(parser));
        parser.match_token(TokenKind::Comma);
        debug!("parameter done");
    }

    params
}

/// `type name params block`
pub fn parse_function(parser: &mut Parser) -> Function {
    debug!("getting function");

    let return_type = parse_data_type(parser);
    let name = parser
        .expect(TokenKind::Identifier)
        .map(|token| token.value)
        .unwrap_or_default();
    let params = parse_params(parser);
    let body = parse_block_stmt(parser);

    Function {
        return_type,
        name,
        params,
        body,
    }
}

/// `import "path"`
pub fn parse_import(parser: &mut Parser) -> Import {
    parser.expect(TokenKind::Import);

    let path = parser
        .expect(TokenKind::Literal)
        .map(|token| token.value)
        .unwrap_or_default();

    Import { path }
}

/// `entry block`
pub fn parse_entry(parser: &mut Parser) -> Entry {
    parser.expect(TokenKind::Entry);

    debug!("get compound statement for entry");

    Entry {
        body: parse_block_stmt(parser),
    }
}
