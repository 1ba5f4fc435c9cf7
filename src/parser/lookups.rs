use std::collections::HashMap;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::Input, parse_input_stmt);
    parser.stmt(TokenKind::Output, parse_output_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Switch, parse_switch_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup table inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
