use tracing::debug;

use crate::{
    ast::statements::{
        Assignment, Block, CallStmt, Declaration, ForStmt, IfStmt, ReturnStmt, Stmt, WhileStmt,
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    stack::ensure_sufficient_stack,
};

use super::{
    expr::{parse_args, parse_condition, parse_expr},
    parser::Parser,
    predicates::{is_assign, is_call, is_decl},
    types::parse_data_type,
};

/// Consumes an optional `;` after a statement.
pub fn end_of_statement(parser: &mut Parser) -> bool {
    parser.match_token(TokenKind::Semicolon)
}

/// Statement dispatch.
///
/// Keyword-led statements are chosen by the current token kind, then a
/// declaration, then the expression statements. Exactly one statement is
/// returned and at least one token is always consumed.
pub fn parse_stmt(parser: &mut Parser) -> Stmt {
    ensure_sufficient_stack(|| parse_stmt_inner(parser))
}

fn parse_stmt_inner(parser: &mut Parser) -> Stmt {
    match parser.current_token_kind() {
        TokenKind::If => Stmt::If(parse_if_stmt(parser)),
        TokenKind::While => Stmt::While(parse_while_stmt(parser)),
        TokenKind::For => Stmt::For(parse_for_stmt(parser)),
        TokenKind::OpenCurly => Stmt::Compound(parse_block_stmt(parser)),
        TokenKind::Semicolon => {
            parser.advance();
            Stmt::Empty
        }
        _ => {
            if is_decl(parser) {
                debug!("found declaration in statement");
                let declaration = parse_declaration(parser);
                end_of_statement(parser);
                Stmt::Declaration(declaration)
            } else {
                parse_expr_stmt(parser)
            }
        }
    }
}

/// Calls, declarations, assignments and returns.
pub fn parse_expr_stmt(parser: &mut Parser) -> Stmt {
    let stmt = if is_call(parser) {
        Stmt::Call(parse_call_stmt(parser))
    } else if is_decl(parser) {
        Stmt::Declaration(parse_declaration(parser))
    } else if is_assign(parser) {
        Stmt::Assignment(parse_assignment(parser))
    } else if parser.current_token_kind() == TokenKind::Return {
        Stmt::Return(parse_return_stmt(parser))
    } else {
        let token = parser.peek().value.clone();
        parser.report(ErrorImpl::UnexpectedTokenDetailed {
            token: token.clone(),
            message: String::from("expected a statement"),
        });
        parser.advance();
        return Stmt::Unknown(token);
    };

    end_of_statement(parser);
    stmt
}

/// `type : name (= expression)?`
///
/// Also used for parameters, so no terminator is consumed here.
pub fn parse_declaration(parser: &mut Parser) -> Declaration {
    debug!("start declaration");

    let data_type = parse_data_type(parser);
    parser.expect(TokenKind::Confirm);

    let (name, initializer) = if is_assign(parser) {
        let assignment = parse_assignment(parser);
        (assignment.target, Some(assignment.value))
    } else {
        let name = parser
            .expect(TokenKind::Identifier)
            .map(|token| token.value)
            .unwrap_or_default();
        (name, None)
    };

    debug!(name = %name, "finished declaration");

    Declaration {
        data_type,
        name,
        initializer,
    }
}

/// `name = expression`
pub fn parse_assignment(parser: &mut Parser) -> Assignment {
    let target = parser
        .expect(TokenKind::Identifier)
        .map(|token| token.value)
        .unwrap_or_default();
    parser.expect(TokenKind::Assignment);

    Assignment {
        target,
        value: parse_expr(parser),
    }
}

/// `{ statement* }`
pub fn parse_block_stmt(parser: &mut Parser) -> Block {
    debug!("started compound");

    parser.expect(TokenKind::OpenCurly);

    let mut body = Vec::new();
    while !parser.match_token(TokenKind::CloseCurly) {
        if parser.at_eof() {
            parser.report(ErrorImpl::UnterminatedList {
                expected: TokenKind::CloseCurly,
            });
            break;
        }
        body.push(parse_stmt(parser));
    }

    debug!(statements = body.len(), "finished compound");

    Block { body }
}

/// `if condition block (else (if ... | block))?`
pub fn parse_if_stmt(parser: &mut Parser) -> IfStmt {
    parser.expect(TokenKind::If);

    let condition = parse_condition(parser);
    let body = parse_block_stmt(parser);

    let else_body = if parser.match_token(TokenKind::Else) {
        let branch = if parser.current_token_kind() == TokenKind::If {
            Stmt::If(ensure_sufficient_stack(|| parse_if_stmt(parser)))
        } else {
            Stmt::Compound(parse_block_stmt(parser))
        };
        Some(Box::new(branch))
    } else {
        None
    };

    IfStmt {
        condition,
        body,
        else_body,
    }
}

pub fn parse_while_stmt(parser: &mut Parser) -> WhileStmt {
    parser.expect(TokenKind::While);

    let condition = parse_condition(parser);
    let body = parse_block_stmt(parser);

    WhileStmt { condition, body }
}

/// `for (init? ; condition? ; step?) block`, parentheses optional.
pub fn parse_for_stmt(parser: &mut Parser) -> ForStmt {
    parser.expect(TokenKind::For);
    let parenthesised = parser.match_token(TokenKind::OpenParen);

    let init = if is_decl(parser) {
        Some(Box::new(Stmt::Declaration(parse_declaration(parser))))
    } else if is_assign(parser) {
        Some(Box::new(Stmt::Assignment(parse_assignment(parser))))
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon);

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_condition(parser))
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon);

    let step = if is_assign(parser) {
        Some(parse_assignment(parser))
    } else {
        None
    };

    if parenthesised {
        parser.expect(TokenKind::CloseParen);
    }

    let body = parse_block_stmt(parser);

    ForStmt {
        init,
        condition,
        step,
        body,
    }
}

/// `return expression?`
pub fn parse_return_stmt(parser: &mut Parser) -> ReturnStmt {
    parser.expect(TokenKind::Return);

    let value = match parser.current_token_kind() {
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF => None,
        _ => Some(parse_expr(parser)),
    };

    ReturnStmt { value }
}

/// `name ( args )`
pub fn parse_call_stmt(parser: &mut Parser) -> CallStmt {
    let callee = parser
        .expect(TokenKind::Identifier)
        .map(|token| token.value)
        .unwrap_or_default();
    let args = parse_args(parser);

    debug!(callee = %callee, args = args.len(), "parsed call");

    CallStmt { callee, args }
}
