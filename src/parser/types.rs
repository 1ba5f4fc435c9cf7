use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// `int | float`
pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    match parser.current_token_kind() {
        TokenKind::Int => {
            parser.advance();
            Ok(Type::Int)
        }
        TokenKind::Float => {
            parser.advance();
            Ok(Type::Float)
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `int` or `float`"),
            },
            parser.get_position(),
        )),
    }
}

/// Maps a `static_cast<T>` token onto its target type.
pub fn cast_type(token: &Token) -> Result<Type, Error> {
    match token.value.as_str() {
        "static_cast<int>" => Ok(Type::Int),
        "static_cast<float>" => Ok(Type::Float),
        other => Err(Error::new(
            ErrorImpl::InvalidCast {
                cast: String::from(other),
            },
            token.span.start.clone(),
        )),
    }
}
