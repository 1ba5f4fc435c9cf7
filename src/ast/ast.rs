use crate::Span;

use super::{
    statements::{
        AssignmentStmt, BlockStmt, BreakStmt, IfStmt, InputStmt, OutputStmt, SwitchStmt,
        WhileStmt,
    },
    types::Type,
};

/// Program root: every declaration comes before the single top-level block.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
    pub body: BlockStmt,
}

/// `a, b, c: float;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub identifiers: Vec<Identifier>,
    pub var_type: Type,
    pub span: Span,
}

/// A name as it appears in the source, with the span used for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: &str, span: Span) -> Self {
        Identifier {
            name: String::from(name),
            span,
        }
    }
}

/// Statement
///
/// One variant per statement shape. The generator matches on this exhaustively,
/// so a new statement kind cannot be added without a handler for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    Input(InputStmt),
    Output(OutputStmt),
    If(IfStmt),
    While(WhileStmt),
    Switch(SwitchStmt),
    Break(BreakStmt),
    Block(BlockStmt),
}
