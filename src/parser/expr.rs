use crate::{
    ast::expressions::{BinaryOp, CompareOp, Condition, Expr, Operand},
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{lookup_compare_op, lookup_math_op},
    parser::Parser,
};

/// Consumes one identifier or literal.
///
/// Any other token is reported and left in place for the caller; the
/// operand degrades to `Operand::Error`.
pub fn parse_operand(parser: &mut Parser) -> Operand {
    let text = parser.peek().value.clone();

    if parser.match_token(TokenKind::Identifier) {
        Operand::Identifier(text)
    } else if parser.match_token(TokenKind::Literal) {
        Operand::Literal(text)
    } else {
        parser.report(ErrorImpl::UnexpectedTokenDetailed {
            token: text.clone(),
            message: String::from("expected identifier or literal"),
        });
        Operand::Error(text)
    }
}

/// `operand (math_op expression)?`
///
/// The right-hand side is a whole expression, so chains nest to the right
/// and all four operators share one precedence. The chain is collected in a
/// loop and folded from the right, so its length does not cost stack.
pub fn parse_expr(parser: &mut Parser) -> Expr {
    let mut spine = vec![];
    let mut operand = parse_operand(parser);

    while parser.match_token(TokenKind::MathOp) {
        let op = math_op_of_previous(parser);
        spine.push((op, operand));
        operand = parse_operand(parser);
    }

    spine
        .into_iter()
        .rev()
        .fold(Expr::Operand(operand), |right, (op, left)| Expr::binary(op, left, right))
}

fn math_op_of_previous(parser: &mut Parser) -> BinaryOp {
    let token = parser.peek_previous().clone();
    let op = lookup_math_op(&token.value);

    if let BinaryOp::Unknown(operator) = &op {
        let position = parser.position_of(&token);
        parser.report_at(ErrorImpl::UnknownOperator { operator: operator.clone() }, position);
    }

    op
}

/// `operand (compare_op operand)?`, optionally wrapped in one pair of
/// parentheses.
pub fn parse_condition(parser: &mut Parser) -> Condition {
    let parenthesised = parser.match_token(TokenKind::OpenParen);

    let left = parse_operand(parser);
    let condition = if parser.match_token(TokenKind::CompareOp) {
        let op = compare_op_of_previous(parser);
        let right = parse_operand(parser);
        Condition::Compare { op, left, right }
    } else {
        Condition::Operand(left)
    };

    if parenthesised {
        parser.expect(TokenKind::CloseParen);
    }

    condition
}

fn compare_op_of_previous(parser: &mut Parser) -> CompareOp {
    let token = parser.peek_previous().clone();
    let op = lookup_compare_op(&token.value);

    if let CompareOp::Unknown(operator) = &op {
        let position = parser.position_of(&token);
        parser.report_at(ErrorImpl::UnknownComparison { operator: operator.clone() }, position);
    }

    op
}

/// `( (expression (, expression)*)? )`
pub fn parse_args(parser: &mut Parser) -> Vec<Expr> {
    let mut args = vec![];

    parser.expect(TokenKind::OpenParen);

    while !parser.match_token(TokenKind::CloseParen) {
        if parser.at_eof() {
            parser.report(ErrorImpl::UnterminatedList {
                expected: TokenKind::CloseParen,
            });
            break;
        }

        args.push(parse_expr(parser));

        if !parser.match_token(TokenKind::Comma) {
            parser.expect(TokenKind::CloseParen);
            break;
        }
    }

    args
}
