use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("break", TokenKind::Break);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("else", TokenKind::Else);
        map.insert("float", TokenKind::Float);
        map.insert("if", TokenKind::If);
        map.insert("input", TokenKind::Input);
        map.insert("int", TokenKind::Int);
        map.insert("output", TokenKind::Output);
        map.insert("switch", TokenKind::Switch);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,
    Cast, // static_cast<int> | static_cast<float>

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Break,
    Case,
    Default,
    Else,
    Float,
    If,
    Input,
    Int,
    Output,
    Switch,
    While,
}

impl TokenKind {
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }

    pub fn is_additive(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Dash)
    }

    pub fn is_multiplicative(&self) -> bool {
        matches!(self, TokenKind::Star | TokenKind::Slash)
    }
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
        if matches!(
            self.kind,
            TokenKind::Identifier | TokenKind::Number | TokenKind::Cast
        ) {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
