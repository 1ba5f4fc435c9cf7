use std::slice::Iter;

use crate::Span;

use super::{
    ast::{Identifier, Stmt},
    expressions::{BoolExpr, Expression},
    types::NumericLiteral,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

/// `target = expression;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: Identifier,
    pub expression: Expression,
    pub span: Span,
}

/// `input(target);`
#[derive(Debug, Clone, PartialEq)]
pub struct InputStmt {
    pub target: Identifier,
    pub span: Span,
}

/// `output(expression);`
#[derive(Debug, Clone, PartialEq)]
pub struct OutputStmt {
    pub expression: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: BoolExpr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: BoolExpr,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// A `case NUM:` arm. The label is always an integer literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub label: NumericLiteral,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub selector: Expression,
    pub cases: Vec<Case>,
    pub default: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub span: Span,
}
