use crate::{
    ast::{
        ast::{Declaration, Identifier, Stmt},
        statements::{
            AssignmentStmt, BlockStmt, BreakStmt, Case, IfStmt, InputStmt, OutputStmt,
            SwitchStmt, WhileStmt,
        },
        types::{NumericLiteral, Type},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_bool_expr, parse_expression},
    parser::Parser,
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected a statement")),
    }
}

/// `idlist ':' type ';'`
pub fn parse_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    let start = parser.get_position();
    let mut identifiers = vec![parse_identifier(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        identifiers.push(parse_identifier(parser)?);
    }

    parser.expect_detailed(TokenKind::Colon, "expected `:` before the declared type")?;
    let var_type: Type = parse_type(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Declaration {
        identifiers,
        var_type,
        span: parser.span_from(start),
    })
}

fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.expect_detailed(TokenKind::Identifier, "expected identifier")?;
    Ok(Identifier::new(&token.value, token.span))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();
    let target = parse_identifier(parser)?;

    parser.expect_detailed(TokenKind::Assignment, "expected `=` after the assigned variable")?;
    let expression = parse_expression(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        target,
        expression,
        span: parser.span_from(start),
    }))
}

pub fn parse_input_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;
    let target = parse_identifier(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Input(InputStmt {
        target,
        span: parser.span_from(start),
    }))
}

pub fn parse_output_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;
    let expression = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Output(OutputStmt {
        expression,
        span: parser.span_from(start),
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_bool_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = Box::new(parse_stmt(parser)?);

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: parser.span_from(start),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_bool_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: parser.span_from(start),
    }))
}

/// `switch '(' expression ')' '{' caselist default ':' stmtlist '}'`
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;
    let selector = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut cases = vec![];
    while parser.current_token_kind() == TokenKind::Case {
        cases.push(parse_case(parser)?);
    }

    let default_start = parser.get_position();
    parser.expect_detailed(TokenKind::Default, "a switch must end with a `default` arm")?;
    parser.expect(TokenKind::Colon)?;
    let body = parse_stmt_list(parser)?;
    let default = BlockStmt {
        body,
        span: parser.span_from(default_start),
    };

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Switch(SwitchStmt {
        selector,
        cases,
        default,
        span: parser.span_from(start),
    }))
}

fn parse_case(parser: &mut Parser) -> Result<Case, Error> {
    let start = parser.advance().span.start;

    let token = parser.expect_detailed(TokenKind::Number, "expected an integer case label")?;
    let label = NumericLiteral::new(&token.value);
    if label.get_type() != Type::Int {
        return Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        ));
    }

    parser.expect(TokenKind::Colon)?;

    let body_start = parser.get_position();
    let body = parse_stmt_list(parser)?;

    Ok(Case {
        label,
        body: BlockStmt {
            body,
            span: parser.span_from(body_start),
        },
        span: parser.span_from(start),
    })
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt {
        span: parser.span_from(start),
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `'{' stmtlist '}'`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.get_position();
    parser.expect_detailed(TokenKind::OpenCurly, "expected `{`")?;

    let body = parse_stmt_list(parser)?;

    parser.expect_detailed(TokenKind::CloseCurly, "expected `}`")?;

    Ok(BlockStmt {
        body,
        span: parser.span_from(start),
    })
}

/// Statements up to the next `}`, `case` or `default`.
fn parse_stmt_list(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly | TokenKind::Case | TokenKind::Default | TokenKind::EOF => break,
            _ => body.push(parse_stmt(parser)?),
        }
    }

    Ok(body)
}
