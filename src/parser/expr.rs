use crate::{
    ast::{
        ast::Identifier,
        expressions::{BoolExpr, BoolFactor, BoolTerm, Expression, Factor, Operator, Term},
        types::NumericLiteral,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, types::cast_type};

fn parse_operator(parser: &mut Parser) -> Operator {
    let token = parser.advance();
    Operator::new(&token.value, token.span.start)
}

/// `expression ADDOP term | term`
pub fn parse_expression(parser: &mut Parser) -> Result<Expression, Error> {
    let mut expression = Expression::single(parse_term(parser)?);

    while parser.current_token_kind().is_additive() {
        let operator = parse_operator(parser);
        let right = parse_term(parser)?;

        expression = Expression {
            right,
            left: Some((operator, Box::new(expression))),
        };
    }

    Ok(expression)
}

/// `term MULOP factor | factor`
pub fn parse_term(parser: &mut Parser) -> Result<Term, Error> {
    let mut term = Term::single(parse_factor(parser)?);

    while parser.current_token_kind().is_multiplicative() {
        let operator = parse_operator(parser);
        let right = parse_factor(parser)?;

        term = Term {
            right,
            left: Some((operator, Box::new(term))),
        };
    }

    Ok(term)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Factor, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Factor::Identifier(Identifier::new(&token.value, token.span)))
        }
        TokenKind::Number => {
            let token = parser.advance();
            Ok(Factor::Literal(NumericLiteral::new(&token.value)))
        }
        TokenKind::OpenParen => {
            let start = parser.advance().span.start;
            let expression = parse_expression(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Factor::Parenthesized {
                expression: Box::new(expression),
                cast: None,
                span: parser.span_from(start),
            })
        }
        TokenKind::Cast => {
            let token = parser.advance();
            let cast = cast_type(&token)?;

            parser.expect(TokenKind::OpenParen)?;
            let expression = parse_expression(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Factor::Parenthesized {
                expression: Box::new(expression),
                cast: Some(cast),
                span: parser.span_from(token.span.start),
            })
        }
        _ => Err(parser.unexpected("expected an expression")),
    }
}

/// `boolexpr '||' boolterm | boolterm`
pub fn parse_bool_expr(parser: &mut Parser) -> Result<BoolExpr, Error> {
    let mut expression = BoolExpr::single(parse_bool_term(parser)?);

    while parser.current_token_kind() == TokenKind::Or {
        parser.advance();
        let right = parse_bool_term(parser)?;

        expression = BoolExpr {
            right,
            left: Some(Box::new(expression)),
        };
    }

    Ok(expression)
}

/// `boolterm '&&' boolfactor | boolfactor`
pub fn parse_bool_term(parser: &mut Parser) -> Result<BoolTerm, Error> {
    let mut term = BoolTerm::single(parse_bool_factor(parser)?);

    while parser.current_token_kind() == TokenKind::And {
        parser.advance();
        let right = parse_bool_factor(parser)?;

        term = BoolTerm {
            right,
            left: Some(Box::new(term)),
        };
    }

    Ok(term)
}

/// `'!' '(' boolexpr ')' | expression RELOP expression`
pub fn parse_bool_factor(parser: &mut Parser) -> Result<BoolFactor, Error> {
    if parser.current_token_kind() == TokenKind::Not {
        let start = parser.advance().span.start;

        parser.expect_detailed(TokenKind::OpenParen, "`!` must be followed by `(`")?;
        let inner = parse_bool_expr(parser)?;
        parser.expect(TokenKind::CloseParen)?;

        return Ok(BoolFactor::Negation {
            inner: Box::new(inner),
            span: parser.span_from(start),
        });
    }

    let left = parse_expression(parser)?;

    if !parser.current_token_kind().is_relational() {
        return Err(parser.unexpected("expected a relational operator"));
    }
    let operator = parse_operator(parser);

    let right = parse_expression(parser)?;

    Ok(BoolFactor::Relational {
        left,
        operator,
        right,
    })
}
