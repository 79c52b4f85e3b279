use crate::{ast::types::DataType, errors::errors::ErrorImpl, lexer::tokens::TokenKind};

use super::{lookups::lookup_data_type, parser::Parser};

/// Consumes one type keyword.
///
/// A missing keyword is reported by `expect`; a keyword outside
/// `int`/`char`/`bool`/`byte` is reported as an unknown type. Both yield
/// `DataType::Unknown`.
pub fn parse_data_type(parser: &mut Parser) -> DataType {
    let Some(token) = parser.expect(TokenKind::TypeKeyword) else {
        let previous = parser.peek_previous().value.clone();
        return DataType::Unknown(previous);
    };

    let data_type = lookup_data_type(&token.value);
    if data_type.is_unknown() {
        let position = parser.position_of(&token);
        parser.report_at(ErrorImpl::UnknownType { type_: token.value }, position);
    }

    data_type
}
